pub mod annual;
pub mod halfyearly;
pub mod monthly;
pub mod quarterly;
