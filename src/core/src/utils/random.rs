use rand::Rng;

/// Uniform float in `[a, b)`.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    if b <= a {
        return a;
    }

    rng.gen_range(a..b)
}

/// Uniform integer in `[min, max]`, both ends inclusive.
#[inline]
pub fn rand_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }

    rng.gen_range(min..=max)
}

/// Uniform float in `[0, 1)`.
#[inline]
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..1.0)
}

/// True with the given probability. Probabilities outside `[0, 1]` saturate, NaN never fires.
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    probability > random_unit(rng)
}

/// Logistic curve, `a` controls sharpness and `b` the center.
#[inline]
pub fn sigmoid(x: f64, a: f64, b: f64) -> f64 {
    1.0 / (1.0 + (-(a * (x - b))).exp())
}

#[inline]
pub fn bound(x: f64, min: f64, max: f64) -> f64 {
    x.max(min).min(max)
}
