/// One selectable city in the add-city dialog.
pub struct CandidateView {
    pub city: String,
    pub state: String,
    pub is_selected: bool,
}
