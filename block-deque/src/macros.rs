macro_rules! _debug {
  ($($tt:tt)+) => {
    #[cfg(feature = "tracing")]
    tracing::debug!($($tt)+);
  };
}

macro_rules! _trace {
  ($($tt:tt)+) => {
    #[cfg(feature = "tracing")]
    tracing::trace!($($tt)+);
  };
}

macro_rules! doc_out_of_bounds_index {
  () => {
    "The provided index does not point to a live element"
  };
}

macro_rules! doc_reserve_overflow {
  () => {
    "There is no capacity left to allocate more blocks"
  };
}
