/// Receiver of page-change requests coming from the render layer.
///
/// This is the only outward contract of the controller. The caller owns
/// the current page: it applies the requested page (or ignores it) and
/// recomputes the view.
pub trait PageChangeHandler {
    /// Called with the 1-based page the user asked for.
    fn on_page_change(&mut self, page: usize);
}

impl<F> PageChangeHandler for F
where
    F: FnMut(usize),
{
    fn on_page_change(&mut self, page: usize) {
        self(page)
    }
}
