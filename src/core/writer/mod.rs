mod state;
mod structured;
mod value;

pub use structured::StructuredWriter;
pub use value::Primitive;
