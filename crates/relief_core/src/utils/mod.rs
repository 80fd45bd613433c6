pub(crate) mod newtype_index;
pub(crate) mod rounding;
