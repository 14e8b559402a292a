//! Per-family free functions over heterogeneous argument types.

/// Generate the free-function surface of a family module.
///
/// `family_api!(Normal, mu: A, sigma: B)` emits `density`, `distribution`,
/// `quantile`, `random`, `random_n`, `random_matrix` and the container forms
/// `density_each`, `distribution_each`, `quantile_each`. Argument types are
/// resolved to one float type, the family struct is built from the converted
/// parameters, and the call is forwarded to [`Distribution`](crate::stats::Distribution)
/// or to [`vectorize::map`](crate::vectorize::map).
///
/// Every argument type takes part in resolving the result type, so calls
/// whose result is used as a method receiver need typed literals.
macro_rules! family_api {
    ($family:ident, $($param:ident: $P:ident),+ $(,)?) => {
        /// Density (mass for discrete families) at `x`, or its natural log
        /// when `log_form`.
        ///
        /// NaN for invalid parameters or NaN `x`; zero (−∞ in log form)
        /// outside the support.
        pub fn density<X, $($P),+>(
            x: X,
            $($param: $P,)+
            log_form: bool,
        ) -> $crate::promote::Promoted<(X, $($P,)+)>
        where
            X: $crate::promote::Numeric,
            $($P: $crate::promote::Numeric,)+
            (X, $($P,)+): $crate::promote::Resolve,
        {
            let dist = $family::<$crate::promote::Promoted<(X, $($P,)+)>>::new(
                $($crate::promote::Numeric::to_real($param)),+
            );
            $crate::stats::Distribution::density(
                &dist,
                $crate::promote::Numeric::to_real(x),
                log_form,
            )
        }

        /// Distribution function P(X ≤ x), or its natural log when
        /// `log_form`.
        ///
        /// NaN for invalid parameters or NaN `x`.
        pub fn distribution<X, $($P),+>(
            x: X,
            $($param: $P,)+
            log_form: bool,
        ) -> $crate::promote::Promoted<(X, $($P,)+)>
        where
            X: $crate::promote::Numeric,
            $($P: $crate::promote::Numeric,)+
            (X, $($P,)+): $crate::promote::Resolve,
        {
            let dist = $family::<$crate::promote::Promoted<(X, $($P,)+)>>::new(
                $($crate::promote::Numeric::to_real($param)),+
            );
            $crate::stats::Distribution::distribution(
                &dist,
                $crate::promote::Numeric::to_real(x),
                log_form,
            )
        }

        /// Quantile at probability `p`.
        ///
        /// NaN for invalid parameters or `p` outside [0, 1].
        pub fn quantile<X, $($P),+>(
            p: X,
            $($param: $P,)+
        ) -> $crate::promote::Promoted<(X, $($P,)+)>
        where
            X: $crate::promote::Numeric,
            $($P: $crate::promote::Numeric,)+
            (X, $($P,)+): $crate::promote::Resolve,
        {
            let dist = $family::<$crate::promote::Promoted<(X, $($P,)+)>>::new(
                $($crate::promote::Numeric::to_real($param)),+
            );
            $crate::stats::Distribution::quantile(&dist, $crate::promote::Numeric::to_real(p))
        }

        /// One random variate drawn with `src`.
        ///
        /// NaN for invalid parameters, without advancing `src`.
        pub fn random<$($P,)+ R>(
            $($param: $P,)+
            src: &mut R,
        ) -> $crate::promote::Promoted<($($P,)+)>
        where
            $($P: $crate::promote::Numeric,)+
            ($($P,)+): $crate::promote::Resolve,
            R: $crate::random::UniformSource<$crate::promote::Promoted<($($P,)+)>> + ?Sized,
        {
            let dist = $family::<$crate::promote::Promoted<($($P,)+)>>::new(
                $($crate::promote::Numeric::to_real($param)),+
            );
            $crate::stats::Distribution::random(&dist, src)
        }

        /// `count` random variates drawn in order with `src`.
        #[cfg(feature = "alloc")]
        pub fn random_n<$($P,)+ R>(
            $($param: $P,)+
            count: usize,
            src: &mut R,
        ) -> ::alloc::vec::Vec<$crate::promote::Promoted<($($P,)+)>>
        where
            $($P: $crate::promote::Numeric,)+
            ($($P,)+): $crate::promote::Resolve,
            R: $crate::random::UniformSource<$crate::promote::Promoted<($($P,)+)>> + ?Sized,
        {
            let dist = $family::<$crate::promote::Promoted<($($P,)+)>>::new(
                $($crate::promote::Numeric::to_real($param)),+
            );
            $crate::stats::Distribution::random_n(&dist, count, src)
        }

        /// An `nrows x ncols` matrix of random variates, drawn in
        /// column-major order with `src`.
        #[cfg(feature = "alloc")]
        pub fn random_matrix<$($P,)+ R>(
            $($param: $P,)+
            nrows: usize,
            ncols: usize,
            src: &mut R,
        ) -> $crate::DynMatrix<$crate::promote::Promoted<($($P,)+)>>
        where
            $($P: $crate::promote::Numeric,)+
            ($($P,)+): $crate::promote::Resolve,
            R: $crate::random::UniformSource<$crate::promote::Promoted<($($P,)+)>> + ?Sized,
        {
            let dist = $family::<$crate::promote::Promoted<($($P,)+)>>::new(
                $($crate::promote::Numeric::to_real($param)),+
            );
            $crate::stats::Distribution::random_matrix(&dist, nrows, ncols, src)
        }

        /// [`density`] at every element of `x`.
        ///
        /// Each parameter is a number or a borrowed container of `x`'s shape.
        /// Elements whose parameters are invalid are NaN.
        pub fn density_each<C, $($P),+>(
            x: &C,
            $($param: $P,)+
            log_form: bool,
        ) -> Result<
            <C as $crate::container::Container>::Output<
                $crate::promote::Promoted<(
                    <C as $crate::container::Container>::Elem,
                    $(<$P as $crate::vectorize::Broadcast>::Elem,)+
                )>,
            >,
            $crate::container::ShapeMismatch,
        >
        where
            C: $crate::container::Container + ?Sized,
            $($P: $crate::vectorize::Broadcast,)+
            (
                <C as $crate::container::Container>::Elem,
                $(<$P as $crate::vectorize::Broadcast>::Elem,)+
            ): $crate::promote::Resolve,
        {
            $crate::vectorize::map::<
                C,
                ($($P,)+),
                $crate::promote::Promoted<(
                    <C as $crate::container::Container>::Elem,
                    $(<$P as $crate::vectorize::Broadcast>::Elem,)+
                )>,
                _,
            >(x, ($($param,)+), move |v, ($($param,)+)| {
                $crate::stats::Distribution::density(&$family::new($($param),+), v, log_form)
            })
        }

        /// [`distribution`] at every element of `x`.
        ///
        /// Each parameter is a number or a borrowed container of `x`'s shape.
        /// Elements whose parameters are invalid are NaN.
        pub fn distribution_each<C, $($P),+>(
            x: &C,
            $($param: $P,)+
            log_form: bool,
        ) -> Result<
            <C as $crate::container::Container>::Output<
                $crate::promote::Promoted<(
                    <C as $crate::container::Container>::Elem,
                    $(<$P as $crate::vectorize::Broadcast>::Elem,)+
                )>,
            >,
            $crate::container::ShapeMismatch,
        >
        where
            C: $crate::container::Container + ?Sized,
            $($P: $crate::vectorize::Broadcast,)+
            (
                <C as $crate::container::Container>::Elem,
                $(<$P as $crate::vectorize::Broadcast>::Elem,)+
            ): $crate::promote::Resolve,
        {
            $crate::vectorize::map::<
                C,
                ($($P,)+),
                $crate::promote::Promoted<(
                    <C as $crate::container::Container>::Elem,
                    $(<$P as $crate::vectorize::Broadcast>::Elem,)+
                )>,
                _,
            >(x, ($($param,)+), move |v, ($($param,)+)| {
                $crate::stats::Distribution::distribution(&$family::new($($param),+), v, log_form)
            })
        }

        /// [`quantile`] at every element of `p`.
        ///
        /// Each parameter is a number or a borrowed container of `p`'s shape.
        /// Elements whose parameters are invalid are NaN.
        pub fn quantile_each<C, $($P),+>(
            p: &C,
            $($param: $P,)+
        ) -> Result<
            <C as $crate::container::Container>::Output<
                $crate::promote::Promoted<(
                    <C as $crate::container::Container>::Elem,
                    $(<$P as $crate::vectorize::Broadcast>::Elem,)+
                )>,
            >,
            $crate::container::ShapeMismatch,
        >
        where
            C: $crate::container::Container + ?Sized,
            $($P: $crate::vectorize::Broadcast,)+
            (
                <C as $crate::container::Container>::Elem,
                $(<$P as $crate::vectorize::Broadcast>::Elem,)+
            ): $crate::promote::Resolve,
        {
            $crate::vectorize::map::<
                C,
                ($($P,)+),
                $crate::promote::Promoted<(
                    <C as $crate::container::Container>::Elem,
                    $(<$P as $crate::vectorize::Broadcast>::Elem,)+
                )>,
                _,
            >(p, ($($param,)+), move |v, ($($param,)+)| {
                $crate::stats::Distribution::quantile(&$family::new($($param),+), v)
            })
        }
    };
}
