pub(crate) trait OptionExtension<T> {
    /// Acts similarly to [`Option::unwrap`] but signals that the [`None`] branch is ruled out by
    /// the surrounding invariants. Debug builds still check this with [`unreachable!`].
    ///
    /// No panics annotation is used: if the method is called, None is impossible.
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    #[allow(clippy::missing_panics_doc)]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("a list invariant was broken"),
        }
    }
}
