//! Loading / loaded visibility flags.

/// Which parts of the output area are visible.
///
/// Both flags start `false`: nothing is shown until the first upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    /// The loading indicator is shown.
    pub loading: bool,
    /// The output image and the download buttons are shown.
    pub output_visible: bool,
}

impl Visibility {
    /// Show the loading indicator in place of the output.
    pub const fn show_loading(&mut self) {
        self.loading = true;
        self.output_visible = false;
    }

    /// Hide the loading indicator and reveal the output area.
    ///
    /// Also used after a failed upload so the UI returns to an
    /// interactive state.
    pub const fn hide_loading(&mut self) {
        self.loading = false;
        self.output_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let v = Visibility::default();
        assert!(!v.loading);
        assert!(!v.output_visible);
    }

    #[test]
    fn loading_hides_output() {
        let mut v = Visibility::default();
        v.hide_loading();
        v.show_loading();
        assert!(v.loading);
        assert!(!v.output_visible);
    }

    #[test]
    fn hide_loading_reveals_output() {
        let mut v = Visibility::default();
        v.show_loading();
        v.hide_loading();
        assert!(!v.loading);
        assert!(v.output_visible);
    }
}
