//! Command dispatch for WindowRegistry.

use casement_common::{Point, Size, WindowId};

use crate::commands::WindowCommand;

use super::entry::OpenWindow;
use super::WindowRegistry;

impl<C: Clone + Default> WindowRegistry<C> {
    /// Execute a command. Returns the window the command targeted or
    /// opened, or `None` for bulk commands and unknown targets.
    pub fn execute(&mut self, cmd: WindowCommand) -> Option<WindowId> {
        match cmd {
            WindowCommand::Open {
                title,
                content_key,
                props,
                min_size,
            } => {
                let mut config = OpenWindow::new(title, content_key, C::default());
                config.props = props;
                config.min_size = min_size;
                Some(self.open_window(config))
            }
            WindowCommand::Close { id } => {
                let id = self.known(id)?;
                self.close_window(id);
                Some(id)
            }
            WindowCommand::Minimize { id } => {
                let id = self.known(id)?;
                self.minimize_window(id);
                Some(id)
            }
            WindowCommand::Maximize { id } => {
                let id = self.known(id)?;
                self.maximize_window(id);
                Some(id)
            }
            WindowCommand::Focus { id } => {
                let id = self.known(id)?;
                self.focus_window(id);
                Some(id)
            }
            WindowCommand::FocusKey { content_key } => {
                let id = self
                    .windows
                    .iter()
                    .find(|w| w.content_key == content_key)
                    .map(|w| w.id)?;
                self.focus_window(id);
                Some(id)
            }
            WindowCommand::Move { id, x, y } => {
                let id = self.known(id)?;
                self.update_position(id, Point::new(x, y));
                Some(id)
            }
            WindowCommand::Resize { id, width, height } => {
                let id = self.known(id)?;
                self.update_size(id, Size::new(width, height));
                Some(id)
            }
            WindowCommand::Arrange { mode } => {
                self.arrange_windows(mode);
                None
            }
            WindowCommand::Viewport { width, height } => {
                self.set_viewport(Size::new(width, height));
                None
            }
            WindowCommand::CloseAll => {
                self.close_all_windows();
                None
            }
            WindowCommand::MinimizeAll => {
                self.minimize_all_windows();
                None
            }
        }
    }

    fn known(&self, id: WindowId) -> Option<WindowId> {
        self.index_of(id).map(|_| id)
    }
}
