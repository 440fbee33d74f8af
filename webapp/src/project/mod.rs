mod card;
mod detail;
mod share;

pub use card::ProjectGrid;
pub use detail::ProjectDetail;
