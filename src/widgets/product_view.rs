use crate::catalog::product_page::ProductPage;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};

/// Variant list, quantity and running total for one product.
pub fn draw_product_page(page: &ProductPage) -> Vec<SpanLine> {
    let mut lines = vec![vec![Span::styled(
        page.title().to_string(),
        Style::new().color(Color::White).bold(),
    )]];

    if let Some(description) = page
        .variants()
        .first()
        .map(|variant| variant.item.description.as_str())
        .filter(|description| !description.is_empty())
    {
        lines.push(vec![Span::styled(
            format!("  {description}"),
            Style::new().color(Color::DarkGrey),
        )]);
    }

    if page.variants().is_empty() {
        lines.push(vec![Span::styled(
            "  (no variants)",
            Style::new().color(Color::DarkGrey),
        )]);
    }

    let selected_id = page.selected().map(|variant| variant.id);
    for variant in page.variants() {
        let selected = selected_id == Some(variant.id);
        let marker = if selected { "  > " } else { "    " };
        let size = if variant.item.size.is_empty() {
            "one size"
        } else {
            variant.item.size.as_str()
        };
        let stock_style = if variant.item.stock == 0 {
            Style::new().color(Color::Red)
        } else {
            Style::new().color(Color::DarkGrey)
        };
        lines.push(vec![
            Span::new(marker),
            Span::styled(
                size.to_string(),
                if selected {
                    Style::new().color(Color::Cyan).bold()
                } else {
                    Style::default()
                },
            ),
            Span::styled(
                format!("  ${:.2}", variant.item.price),
                Style::new().color(Color::Green),
            ),
            Span::styled(format!("  {} in stock", variant.item.stock), stock_style),
        ]);
    }

    lines.push(Vec::new());
    lines.push(vec![
        Span::new(format!("  Quantity: {}", page.quantity())),
        Span::styled(
            format!("  Total: ${:.2}", page.total_cost()),
            Style::new().color(Color::Yellow).bold(),
        ),
    ]);
    lines.push(vec![Span::styled(
        "  Up/Down size, +/- quantity, Enter add to cart, Esc back.",
        Style::new().color(Color::DarkGrey),
    )]);
    lines
}

#[cfg(test)]
mod tests {
    use super::draw_product_page;
    use crate::catalog::item::Item;
    use crate::catalog::product_page::ProductPage;
    use crate::core::search::ItemMatch;
    use crate::ui::span::line_text;

    #[test]
    fn marks_selected_variant_and_total() {
        let items = vec![
            Item::new("Peacoat").with_size("M").with_price(80.0).with_stock(3),
            Item::new("Peacoat").with_size("L").with_price(85.0),
        ];
        let chosen = ItemMatch {
            id: 0,
            item: items[0].clone(),
        };
        let page = ProductPage::for_match(&items, &chosen);
        let text: Vec<String> = draw_product_page(&page).iter().map(line_text).collect();

        assert_eq!(text[0], "Peacoat");
        assert_eq!(text[1], "  > M  $80.00  3 in stock");
        assert_eq!(text[2], "    L  $85.00  0 in stock");
        assert!(text.iter().any(|line| line == "  Quantity: 1  Total: $80.00"));
    }
}
