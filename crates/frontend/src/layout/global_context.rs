use leptos::prelude::*;

/// Layout state shared by the shell zones.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Sidebar expanded (labels visible) or collapsed to icons
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_toggle_left() {
        Owner::new().with(|| {
            let ctx = AppGlobalContext::new();
            assert!(ctx.left_open.get_untracked());
            ctx.toggle_left();
            assert!(!ctx.left_open.get_untracked());
            ctx.toggle_left();
            assert!(ctx.left_open.get_untracked());
        });
    }
}
