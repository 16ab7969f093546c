pub mod attrs;
pub mod envconf;
pub mod field_type;
