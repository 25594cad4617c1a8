use strum::{AsRefStr, Display, EnumString};

/// Moderation state of a submitted location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}
