//! Multi-criteria employee search spanning employees, roles, billing, projects, and resumes.

mod complex;
mod criteria;
mod experience;

pub use complex::CandidateView;
pub use criteria::SearchCriteria;
pub use experience::years_of_experience;
