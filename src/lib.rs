pub mod formation;
pub mod jsonio;
pub mod paths;
pub mod sheet;
