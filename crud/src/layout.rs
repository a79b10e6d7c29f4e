/// Whether the off-canvas sidebar is slid into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OffcanvasState {
    active: bool,
}

impl OffcanvasState {
    const BASE_CLASS: &str = "row row-offcanvas row-offcanvas-left";

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    /// Class attribute of the `.row-offcanvas` container.
    pub fn container_class(&self) -> String {
        if self.active {
            format!("{} active", Self::BASE_CLASS)
        } else {
            Self::BASE_CLASS.to_string()
        }
    }
}
