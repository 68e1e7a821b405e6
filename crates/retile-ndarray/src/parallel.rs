/// Runs the function inside the rayon thread pool when the `std` feature is enabled, and on
/// the current thread otherwise.
macro_rules! run_par {
    (
        $func:expr
    ) => {{
        #[cfg(feature = "std")]
        use rayon::prelude::*;

        #[cfg(feature = "std")]
        let output = rayon::scope(|_| $func());

        #[cfg(not(feature = "std"))]
        let output = $func();

        output
    }};
}

/// Splits a mutable slice into chunks of `$len` elements, processed in parallel when the
/// `std` feature is enabled.
///
/// Must be used inside `run_par!`.
macro_rules! chunks_mut_par {
    (
        $slice:expr, $len:expr
    ) => {{
        #[cfg(feature = "std")]
        let output = $slice.par_chunks_mut($len);

        #[cfg(not(feature = "std"))]
        let output = $slice.chunks_mut($len);

        output
    }};
}

pub(crate) use chunks_mut_par;
pub(crate) use run_par;
