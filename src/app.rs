use crate::catalog::product_page::{ProductPage, PurchaseRequest};
use crate::catalog::snapshot::{SnapshotProvider, SnapshotStore};
use crate::core::search::ItemMatch;
use crate::runtime::command::{Command, TextAction};
use crate::state::session::{SearchSession, Selection, SessionConfig};
use crate::terminal::{Frame, KeyCode};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::product_view::draw_product_page;
use crate::widgets::search_box::SearchBox;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub enum View {
    Search,
    Product(ProductPage),
}

/// Search screen plus the product page it navigates to.
pub struct StorefrontApp {
    store: Arc<SnapshotStore>,
    session: SearchSession<Arc<SnapshotStore>, Vec<Selection>>,
    search_box: SearchBox,
    view: View,
    cart: Vec<PurchaseRequest>,
    status: Option<String>,
    should_exit: bool,
}

impl StorefrontApp {
    pub fn new(store: Arc<SnapshotStore>, config: SessionConfig, max_visible: usize) -> Self {
        let session = SearchSession::with_config(Arc::clone(&store), Vec::new(), config);
        Self {
            store,
            session,
            search_box: SearchBox::new("Search").with_max_visible(max_visible),
            view: View::Search,
            cart: Vec::new(),
            status: None,
            should_exit: false,
        }
    }

    pub fn session(&self) -> &SearchSession<Arc<SnapshotStore>, Vec<Selection>> {
        &self.session
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn cart(&self) -> &[PurchaseRequest] {
        &self.cart
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        self.session.poll_timeout(now, idle)
    }

    /// Fires due debounce commits. Returns whether a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.session.tick(now) && matches!(self.view, View::Search)
    }

    /// Applies one command. Returns whether a redraw is needed.
    pub fn handle(&mut self, command: Command, now: Instant) -> bool {
        if let Command::Exit = command {
            self.should_exit = true;
            return false;
        }
        let redraw = match self.view {
            View::Search => self.handle_search(command, now),
            View::Product(_) => self.handle_product(command),
        };
        self.open_selection() || redraw
    }

    pub fn dispose(&mut self) {
        self.session.dispose();
    }

    pub fn draw(&self) -> Frame {
        let (mut lines, cursor) = match &self.view {
            View::Search => {
                let output = self.search_box.draw(&self.session);
                (output.lines, output.cursor)
            }
            View::Product(page) => (draw_product_page(page), None),
        };
        if let Some(status) = &self.status {
            lines.push(Vec::new());
            lines.push(vec![Span::styled(
                status.clone(),
                Style::new().color(Color::Yellow),
            )]);
        }
        Frame { lines, cursor }
    }

    fn handle_search(&mut self, command: Command, now: Instant) -> bool {
        match command {
            Command::Cancel => {
                self.session.on_cancel();
                self.search_box.clear();
                self.status = None;
                true
            }
            Command::Submit => self.session.on_commit(),
            Command::Move(direction) => self.session.on_directional(direction),
            Command::InputKey(key) => {
                if self.search_box.on_key(key) {
                    self.session.on_raw_input(self.search_box.value(), now);
                }
                true
            }
            Command::TextAction(TextAction::DeleteWordLeft) => {
                if self.search_box.delete_word_left() {
                    self.session.on_raw_input(self.search_box.value(), now);
                }
                true
            }
            Command::Exit => false,
        }
    }

    fn handle_product(&mut self, command: Command) -> bool {
        let View::Product(page) = &mut self.view else {
            return false;
        };
        match command {
            Command::Cancel => {
                self.view = View::Search;
                true
            }
            Command::Move(direction) => page.move_selection(direction),
            Command::InputKey(key) => match key.code {
                KeyCode::Char('+') => page.increment(),
                KeyCode::Char('-') => page.decrement(),
                _ => false,
            },
            Command::Submit => {
                match page.purchase_request() {
                    Ok(request) => {
                        tracing::info!(
                            key = %request.key,
                            quantity = request.quantity,
                            total = request.total,
                            "added to cart"
                        );
                        self.status = Some(format!(
                            "Added {} x {} ({}) for ${:.2}",
                            request.quantity, request.title, request.size, request.total
                        ));
                        self.cart.push(request);
                    }
                    Err(err) => {
                        tracing::warn!(%err, "purchase rejected");
                        self.status = Some(err.to_string());
                    }
                }
                true
            }
            Command::TextAction(_) | Command::Exit => false,
        }
    }

    /// Turns selections the session emitted into an open product page.
    fn open_selection(&mut self) -> bool {
        let Some(selection) = std::mem::take(self.session.router_mut()).pop() else {
            return false;
        };
        self.search_box.clear();
        self.status = None;
        let chosen = ItemMatch {
            id: selection.id,
            item: selection.item,
        };
        let snapshot = self.store.current();
        self.view = View::Product(ProductPage::for_match(&snapshot, &chosen));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{StorefrontApp, View};
    use crate::catalog::item::Item;
    use crate::catalog::snapshot::SnapshotStore;
    use crate::runtime::command::Command;
    use crate::state::highlight::Direction;
    use crate::state::session::{SearchPhase, SessionConfig};
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::ui::span::line_text;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn app() -> StorefrontApp {
        let store = Arc::new(SnapshotStore::new(vec![
            Item::new("Red Shirt").with_size("M").with_price(20.0).with_stock(4),
            Item::new("Blue Shirt").with_size("L").with_price(22.0).with_stock(1),
            Item::new("Red Hat").with_price(12.5).with_stock(2),
            Item::new("Red Shirt").with_size("XL").with_price(21.0).with_stock(1),
        ]));
        StorefrontApp::new(store, SessionConfig::default(), 6)
    }

    fn type_text(app: &mut StorefrontApp, text: &str, now: Instant) {
        for ch in text.chars() {
            app.handle(Command::InputKey(KeyEvent::plain(KeyCode::Char(ch))), now);
        }
    }

    #[test]
    fn typing_commits_after_quiet_window() {
        let start = Instant::now();
        let mut app = app();
        type_text(&mut app, "red", start);
        assert_eq!(app.session().phase(), SearchPhase::Typing);
        assert!(!app.tick(start + Duration::from_millis(100)));
        assert!(app.tick(start + Duration::from_millis(200)));
        assert_eq!(app.session().matches().len(), 2);
    }

    #[test]
    fn enter_on_highlight_opens_product_page() {
        let start = Instant::now();
        let mut app = app();
        type_text(&mut app, "red", start);
        app.tick(start + Duration::from_millis(200));
        app.handle(Command::Move(Direction::Down), start);
        assert!(app.handle(Command::Submit, start));

        let View::Product(page) = app.view() else {
            panic!("expected product view");
        };
        assert_eq!(page.title(), "Red Shirt");
        assert_eq!(page.variants().len(), 2);
        assert_eq!(page.selected().map(|v| v.id), Some(0));
        assert_eq!(app.session().phase(), SearchPhase::Idle);
        assert!(app.session().router().is_empty());
    }

    #[test]
    fn product_page_adds_to_cart_and_returns() {
        let start = Instant::now();
        let mut app = app();
        type_text(&mut app, "hat", start);
        app.tick(start + Duration::from_millis(200));
        app.handle(Command::Submit, start);

        app.handle(Command::InputKey(KeyEvent::plain(KeyCode::Char('+'))), start);
        app.handle(Command::InputKey(KeyEvent::plain(KeyCode::Char('+'))), start);
        app.handle(Command::Submit, start);
        assert_eq!(app.cart().len(), 1);
        assert_eq!(app.cart()[0].quantity, 2);
        assert_eq!(app.status(), Some("Added 2 x Red Hat () for $25.00"));

        app.handle(Command::Cancel, start);
        assert!(matches!(app.view(), View::Search));
        let text: Vec<String> = app.draw().lines.iter().map(line_text).collect();
        assert_eq!(text[0], "Search: ");
    }

    #[test]
    fn escape_clears_query_and_exit_is_sticky() {
        let start = Instant::now();
        let mut app = app();
        type_text(&mut app, "shirt", start);
        app.handle(Command::Cancel, start);
        assert!(!app.tick(start + Duration::from_millis(500)));
        assert!(app.session().matches().is_empty());

        app.handle(Command::Exit, start);
        assert!(app.should_exit());
    }
}
