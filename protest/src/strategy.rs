//! Strategy-based generation system for composable test data creation.

use crate::config::GeneratorConfig;
use crate::generator::Generator;

/// A strategy for generating values of a specific type
///
/// Strategies are composable and can be combined to create more complex generation patterns.
/// They encapsulate both the generation logic and the shrinking behavior.
pub trait Strategy {
    /// The type of values this strategy generates
    type Value: 'static;

    /// Generate a value using this strategy
    fn generate<R: rand::Rng>(&self, rng: &mut R, config: &GeneratorConfig) -> Self::Value;

    /// Create an iterator of shrunk values from the given value
    fn shrink(&self, value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>>;

    /// Map this strategy to produce values of a different type
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Value) -> U,
        U: 'static,
    {
        Map {
            strategy: self,
            mapper: f,
        }
    }

    /// Filter values produced by this strategy
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Value) -> bool,
    {
        Filter {
            strategy: self,
            predicate,
        }
    }

    /// Combine this strategy with another to produce tuples
    fn zip<S>(self, other: S) -> Zip<Self, S>
    where
        Self: Sized,
        S: Strategy,
    {
        Zip {
            left: self,
            right: other,
        }
    }

    /// Flat map (bind) this strategy with a function that produces another strategy
    /// This is the most powerful combinator but also the trickiest for shrinking
    fn flat_map<F, S>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Value) -> S,
        S: Strategy,
    {
        FlatMap {
            strategy: self,
            flat_mapper: f,
        }
    }
}

/// A strategy that maps values from one type to another
///
/// To enable proper shrinking through map, we need to store the original input
/// alongside the mapped output. This is done using `MappedValue`.
pub struct Map<S, F> {
    strategy: S,
    mapper: F,
}

/// A value that stores both the original input and the mapped output
/// This allows us to shrink the input and re-map to get shrunk outputs
///
/// `MappedValue` implements `Deref` to the output type for ergonomic access.
/// You can use it as if it were just the output value, but it preserves
/// the input for proper shrinking.
#[derive(Debug, Clone, Copy)]
pub struct MappedValue<T, U> {
    /// The original input value before mapping
    pub input: T,
    /// The mapped output value
    pub output: U,
}

impl<T, U> std::ops::Deref for MappedValue<T, U> {
    type Target = U;

    fn deref(&self) -> &Self::Target {
        &self.output
    }
}

// Allow comparing MappedValue with any type that U can be compared to
impl<T, U, V> PartialEq<V> for MappedValue<T, U>
where
    U: PartialEq<V>,
{
    fn eq(&self, other: &V) -> bool {
        self.output.eq(other)
    }
}

impl<T, U, V> PartialOrd<V> for MappedValue<T, U>
where
    U: PartialOrd<V>,
{
    fn partial_cmp(&self, other: &V) -> Option<std::cmp::Ordering> {
        self.output.partial_cmp(other)
    }
}

impl<T, U: std::fmt::Display> std::fmt::Display for MappedValue<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.output.fmt(f)
    }
}

// Forward common trait impls to the output
impl<T, U: std::ops::Add<Output = V>, V> std::ops::Add for MappedValue<T, U> {
    type Output = V;

    fn add(self, rhs: Self) -> Self::Output {
        self.output + rhs.output
    }
}

impl<T, U: std::ops::Sub<Output = V>, V> std::ops::Sub for MappedValue<T, U> {
    type Output = V;

    fn sub(self, rhs: Self) -> Self::Output {
        self.output - rhs.output
    }
}

impl<T, U: std::ops::Mul<Output = V>, V> std::ops::Mul for MappedValue<T, U> {
    type Output = V;

    fn mul(self, rhs: Self) -> Self::Output {
        self.output * rhs.output
    }
}

impl<T, U: std::ops::Div<Output = V>, V> std::ops::Div for MappedValue<T, U> {
    type Output = V;

    fn div(self, rhs: Self) -> Self::Output {
        self.output / rhs.output
    }
}

impl<T, U, V, W> std::ops::Rem<V> for MappedValue<T, U>
where
    U: std::ops::Rem<V, Output = W>,
{
    type Output = W;

    fn rem(self, rhs: V) -> Self::Output {
        self.output % rhs
    }
}

impl<S, F, U> Strategy for Map<S, F>
where
    S: Strategy,
    F: Fn(S::Value) -> U + Clone + 'static,
    U: 'static,
    S::Value: Clone,
{
    // Instead of just U, we return MappedValue<S::Value, U> to preserve shrinking info
    type Value = MappedValue<S::Value, U>;

    fn generate<R: rand::Rng>(&self, rng: &mut R, config: &GeneratorConfig) -> Self::Value {
        let input = self.strategy.generate(rng, config);
        let output = (self.mapper)(input.clone());
        MappedValue { input, output }
    }

    fn shrink(&self, value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>> {
        // Shrink the input, then re-map each shrunk input to get shrunk outputs
        let shrunk_inputs = self.strategy.shrink(&value.input);
        let mapper = self.mapper.clone();

        Box::new(shrunk_inputs.map(move |input| {
            let output = mapper(input.clone());
            MappedValue { input, output }
        }))
    }
}

/// A strategy that filters values based on a predicate
pub struct Filter<S, F> {
    strategy: S,
    predicate: F,
}

impl<S, F> Strategy for Filter<S, F>
where
    S: Strategy,
    F: Fn(&S::Value) -> bool + Clone + 'static,
    S::Value: Clone,
{
    type Value = S::Value;

    fn generate<R: rand::Rng>(&self, rng: &mut R, config: &GeneratorConfig) -> Self::Value {
        // Try to generate a value that passes the filter
        // Limit attempts to avoid infinite loops
        for _ in 0..1000 {
            let value = self.strategy.generate(rng, config);
            if (self.predicate)(&value) {
                return value;
            }
        }
        panic!("Filter strategy failed to generate a valid value after 1000 attempts");
    }

    fn shrink(&self, value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>> {
        // Shrink the underlying value, but only yield shrinks that pass the filter predicate
        let shrunk_values = self.strategy.shrink(value);
        let predicate = self.predicate.clone();

        Box::new(shrunk_values.filter(move |v| predicate(v)))
    }
}

/// A strategy that combines two strategies to produce tuples
pub struct Zip<L, R> {
    left: L,
    right: R,
}

impl<L, R> Strategy for Zip<L, R>
where
    L: Strategy,
    R: Strategy,
    L::Value: Clone,
    R::Value: Clone,
{
    type Value = (L::Value, R::Value);

    fn generate<RNG: rand::Rng>(&self, rng: &mut RNG, config: &GeneratorConfig) -> Self::Value {
        let left_value = self.left.generate(rng, config);
        let right_value = self.right.generate(rng, config);
        (left_value, right_value)
    }

    fn shrink(&self, value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>> {
        // Shrink both sides of the tuple
        // Strategy: First try shrinking left while keeping right constant,
        // then try shrinking right while keeping left constant
        let (left_val, right_val) = value;

        let left_shrinks = self.left.shrink(left_val);
        let right_val_for_left = right_val.clone();
        let left_combinations = left_shrinks.map(move |l| (l, right_val_for_left.clone()));

        let right_shrinks = self.right.shrink(right_val);
        let left_val_for_right = left_val.clone();
        let right_combinations = right_shrinks.map(move |r| (left_val_for_right.clone(), r));

        // Chain: first try shrinking left, then try shrinking right
        Box::new(left_combinations.chain(right_combinations))
    }
}

/// A strategy that applies a function that produces another strategy (flat_map/bind)
///
/// This is the most powerful combinator. The second strategy depends on the value
/// produced by the first strategy. For proper shrinking, we need to store both
/// the first value and the second value.
pub struct FlatMap<S, F> {
    strategy: S,
    flat_mapper: F,
}

/// A value produced by flat_map that stores both stages for proper shrinking
#[derive(Debug, Clone)]
pub struct FlatMappedValue<T, U> {
    /// The value from the first strategy
    pub first: T,
    /// The value from the second (dependent) strategy
    pub second: U,
}

impl<S, F, S2> Strategy for FlatMap<S, F>
where
    S: Strategy,
    F: Fn(S::Value) -> S2 + Clone + 'static,
    S2: Strategy,
    S::Value: Clone,
    S2::Value: Clone,
{
    type Value = FlatMappedValue<S::Value, S2::Value>;

    fn generate<R: rand::Rng>(&self, rng: &mut R, config: &GeneratorConfig) -> Self::Value {
        // Generate from first strategy
        let first = self.strategy.generate(rng, config);
        // Use that value to create the second strategy
        let second_strategy = (self.flat_mapper)(first.clone());
        // Generate from the second strategy
        let second = second_strategy.generate(rng, config);

        FlatMappedValue { first, second }
    }

    fn shrink(&self, value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>> {
        // This is the complex part of flat_map shrinking
        // We have two approaches:
        // 1. Shrink the first value, then re-generate the second value from the shrunk first
        // 2. Keep the first value fixed, and shrink the second value

        let flat_mapper = self.flat_mapper.clone();

        // Approach 2: Keep first fixed, shrink second
        let second_strategy = (flat_mapper.clone())(value.first.clone());
        let second_shrinks = second_strategy.shrink(&value.second);
        let first_val = value.first.clone();
        let second_only_shrinks: Vec<_> = second_shrinks
            .map(move |second_shrunk| FlatMappedValue {
                first: first_val.clone(),
                second: second_shrunk,
            })
            .collect();

        // Approach 1: Shrink first, regenerate second
        let first_shrinks = self.strategy.shrink(&value.first);
        let second_val = value.second.clone();
        let first_shrink_combinations: Vec<_> = first_shrinks
            .flat_map({
                let flat_mapper = flat_mapper.clone();
                let second_val = second_val.clone();
                move |first_shrunk| {
                    // For each shrunk first value, create the dependent strategy
                    // and generate a new second value (we can't shrink here as we don't have an RNG)
                    // So we'll just use the shrinks of the original second strategy
                    let second_strategy = flat_mapper(first_shrunk.clone());
                    let second_shrinks = second_strategy.shrink(&second_val);
                    second_shrinks
                        .map(move |second_shrunk| FlatMappedValue {
                            first: first_shrunk.clone(),
                            second: second_shrunk,
                        })
                        .collect::<Vec<_>>()
                }
            })
            .collect();

        // Try approach 2 first (simpler), then approach 1 (more aggressive)
        Box::new(
            second_only_shrinks
                .into_iter()
                .chain(first_shrink_combinations),
        )
    }
}

/// A strategy that always produces the same value
#[derive(Debug, Clone)]
pub struct Just<T> {
    value: T,
}

impl<T: Clone + 'static> Strategy for Just<T> {
    type Value = T;

    fn generate<R: rand::Rng>(&self, _rng: &mut R, _config: &GeneratorConfig) -> Self::Value {
        self.value.clone()
    }

    fn shrink(&self, _value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>> {
        // A constant value cannot be shrunk
        Box::new(std::iter::empty())
    }
}

// Also implement Generator for Just
impl<T> Generator<T> for Just<T>
where
    T: Clone + std::fmt::Debug + PartialEq + 'static,
{
    fn generate(&self, _rng: &mut dyn rand::RngCore, _config: &GeneratorConfig) -> T {
        self.value.clone()
    }

    fn shrink(&self, _value: &T) -> Box<dyn Iterator<Item = T>> {
        Box::new(std::iter::empty())
    }
}

/// A strategy that chooses randomly from a collection of values
#[derive(Debug, Clone)]
pub struct OneOf<T> {
    values: Vec<T>,
}

impl<T: Clone + PartialEq + 'static> Strategy for OneOf<T> {
    type Value = T;

    fn generate<R: rand::Rng>(&self, rng: &mut R, _config: &GeneratorConfig) -> Self::Value {
        if self.values.is_empty() {
            panic!("OneOf strategy cannot generate from empty collection");
        }
        let index = rng.gen_range(0..self.values.len());
        self.values[index].clone()
    }

    fn shrink(&self, value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>> {
        // For OneOf, we return all other values in the collection as potential shrinks
        // We filter out the current value and return the rest
        // Earlier values in the list are tried first (assuming simpler values are at the front)
        let shrinks: Vec<T> = self
            .values
            .iter()
            .filter(|v| *v != value)
            .cloned()
            .collect();

        Box::new(shrinks.into_iter())
    }
}

/// A strategy for generating values in a numeric range
#[derive(Debug, Clone)]
pub struct Range<T> {
    start: T,
    end: T,
}

// Macro to implement Strategy with shrinking for specific integer types
macro_rules! impl_range_strategy {
    ($($t:ty),*) => {
        $(
            impl Strategy for Range<$t> {
                type Value = $t;

                fn generate<R: rand::Rng>(&self, rng: &mut R, _config: &GeneratorConfig) -> Self::Value {
                    rng.gen_range(self.start..=self.end)
                }

                fn shrink(&self, value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>> {
                    let value = *value;

                    if value == self.start {
                        return Box::new(std::iter::empty());
                    }

                    // Shrink towards zero if it's in range, otherwise towards start
                    #[allow(unused_comparisons)]
                    let target = if self.start <= 0 && 0 <= self.end && 0 <= value {
                        0
                    } else {
                        self.start
                    };

                    let mut shrinks = Vec::new();
                    let mut current = value;

                    while current != target {
                        let diff = if current > target {
                            current - target
                        } else {
                            target - current
                        };
                        let step = if diff == 1 { 1 } else { diff / 2 };
                        current = if current > target {
                            current - step
                        } else {
                            current + step
                        };

                        // Only include values within the range and not equal to the original
                        if current >= self.start && current <= self.end && current != value {
                            shrinks.push(current);
                        }

                        if current == target {
                            break;
                        }
                    }

                    Box::new(shrinks.into_iter())
                }
            }
        )*
    };
}

// Implement for common integer types with proper shrinking
impl_range_strategy!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// Also implement Generator for these integer types
macro_rules! impl_range_generator {
    ($($t:ty),*) => {
        $(
            impl Generator<$t> for Range<$t> {
                fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GeneratorConfig) -> $t {
                    use rand::Rng;
                    rng.gen_range(self.start..=self.end)
                }

                fn shrink(&self, value: &$t) -> Box<dyn Iterator<Item = $t>> {
                    Strategy::shrink(self, value)
                }
            }
        )*
    };
}

impl_range_generator!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// For float types, implement Strategy with shrinking
impl Strategy for Range<f32> {
    type Value = f32;

    fn generate<R: rand::Rng>(&self, rng: &mut R, _config: &GeneratorConfig) -> Self::Value {
        rng.gen_range(self.start..=self.end)
    }

    fn shrink(&self, value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>> {
        let value = *value;

        // Handle special cases
        if value.is_nan() || value.is_infinite() {
            // Can't shrink NaN or infinity in a meaningful way
            return Box::new(std::iter::empty());
        }

        // If value is at the start, no shrinking
        if (value - self.start).abs() < f32::EPSILON {
            return Box::new(std::iter::empty());
        }

        // Determine target: 0.0 if in range, otherwise range start
        let target = if self.start <= 0.0 && 0.0 <= self.end && 0.0 <= value {
            0.0
        } else {
            self.start
        };

        let mut shrinks = Vec::new();
        let mut current = value;

        // Binary search toward target with floating point
        while (current - target).abs() > f32::EPSILON {
            let diff = current - target;
            let step = diff / 2.0;

            // If step is too small, try the target directly
            if step.abs() < f32::EPSILON * 10.0 {
                if target >= self.start
                    && target <= self.end
                    && (target - value).abs() > f32::EPSILON
                {
                    shrinks.push(target);
                }
                break;
            }

            current -= step;

            // Only include values within the range and different from original
            if current >= self.start
                && current <= self.end
                && (current - value).abs() > f32::EPSILON
            {
                shrinks.push(current);
            }

            if (current - target).abs() < f32::EPSILON {
                break;
            }
        }

        Box::new(shrinks.into_iter())
    }
}

impl Strategy for Range<f64> {
    type Value = f64;

    fn generate<R: rand::Rng>(&self, rng: &mut R, _config: &GeneratorConfig) -> Self::Value {
        rng.gen_range(self.start..=self.end)
    }

    fn shrink(&self, value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>> {
        let value = *value;

        // Handle special cases
        if value.is_nan() || value.is_infinite() {
            // Can't shrink NaN or infinity in a meaningful way
            return Box::new(std::iter::empty());
        }

        // If value is at the start, no shrinking
        if (value - self.start).abs() < f64::EPSILON {
            return Box::new(std::iter::empty());
        }

        // Determine target: 0.0 if in range, otherwise range start
        let target = if self.start <= 0.0 && 0.0 <= self.end && 0.0 <= value {
            0.0
        } else {
            self.start
        };

        let mut shrinks = Vec::new();
        let mut current = value;

        // Binary search toward target with floating point
        while (current - target).abs() > f64::EPSILON {
            let diff = current - target;
            let step = diff / 2.0;

            // If step is too small, try the target directly
            if step.abs() < f64::EPSILON * 10.0 {
                if target >= self.start
                    && target <= self.end
                    && (target - value).abs() > f64::EPSILON
                {
                    shrinks.push(target);
                }
                break;
            }

            current -= step;

            // Only include values within the range and different from original
            if current >= self.start
                && current <= self.end
                && (current - value).abs() > f64::EPSILON
            {
                shrinks.push(current);
            }

            if (current - target).abs() < f64::EPSILON {
                break;
            }
        }

        Box::new(shrinks.into_iter())
    }
}

// Implement Generator for float types
impl Generator<f32> for Range<f32> {
    fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GeneratorConfig) -> f32 {
        use rand::Rng;
        rng.gen_range(self.start..=self.end)
    }

    fn shrink(&self, value: &f32) -> Box<dyn Iterator<Item = f32>> {
        Strategy::shrink(self, value)
    }
}

impl Generator<f64> for Range<f64> {
    fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GeneratorConfig) -> f64 {
        use rand::Rng;
        rng.gen_range(self.start..=self.end)
    }

    fn shrink(&self, value: &f64) -> Box<dyn Iterator<Item = f64>> {
        Strategy::shrink(self, value)
    }
}

/// A strategy for generating 3-tuples
pub struct Tuple3<A, B, C> {
    a: A,
    b: B,
    c: C,
}

impl<A, B, C> Strategy for Tuple3<A, B, C>
where
    A: Strategy,
    B: Strategy,
    C: Strategy,
    A::Value: Clone,
    B::Value: Clone,
    C::Value: Clone,
{
    type Value = (A::Value, B::Value, C::Value);

    fn generate<RNG: rand::Rng>(&self, rng: &mut RNG, config: &GeneratorConfig) -> Self::Value {
        let a_val = self.a.generate(rng, config);
        let b_val = self.b.generate(rng, config);
        let c_val = self.c.generate(rng, config);
        (a_val, b_val, c_val)
    }

    fn shrink(&self, value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>> {
        // Shrink each element independently
        // Strategy: Try shrinking a, then b, then c
        let (a_val, b_val, c_val) = value;

        let a_shrinks = self.a.shrink(a_val);
        let b_val_for_a = b_val.clone();
        let c_val_for_a = c_val.clone();
        let a_combinations = a_shrinks.map(move |a| (a, b_val_for_a.clone(), c_val_for_a.clone()));

        let b_shrinks = self.b.shrink(b_val);
        let a_val_for_b = a_val.clone();
        let c_val_for_b = c_val.clone();
        let b_combinations = b_shrinks.map(move |b| (a_val_for_b.clone(), b, c_val_for_b.clone()));

        let c_shrinks = self.c.shrink(c_val);
        let a_val_for_c = a_val.clone();
        let b_val_for_c = b_val.clone();
        let c_combinations = c_shrinks.map(move |c| (a_val_for_c.clone(), b_val_for_c.clone(), c));

        // Chain: first try shrinking a, then b, then c
        Box::new(a_combinations.chain(b_combinations).chain(c_combinations))
    }
}

/// A strategy for generating 4-tuples
pub struct Tuple4<A, B, C, D> {
    a: A,
    b: B,
    c: C,
    d: D,
}

impl<A, B, C, D> Strategy for Tuple4<A, B, C, D>
where
    A: Strategy,
    B: Strategy,
    C: Strategy,
    D: Strategy,
    A::Value: Clone,
    B::Value: Clone,
    C::Value: Clone,
    D::Value: Clone,
{
    type Value = (A::Value, B::Value, C::Value, D::Value);

    fn generate<RNG: rand::Rng>(&self, rng: &mut RNG, config: &GeneratorConfig) -> Self::Value {
        let a_val = self.a.generate(rng, config);
        let b_val = self.b.generate(rng, config);
        let c_val = self.c.generate(rng, config);
        let d_val = self.d.generate(rng, config);
        (a_val, b_val, c_val, d_val)
    }

    fn shrink(&self, value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>> {
        // Shrink each element independently
        let (a_val, b_val, c_val, d_val) = value;

        let a_shrinks = self.a.shrink(a_val);
        let b_val_for_a = b_val.clone();
        let c_val_for_a = c_val.clone();
        let d_val_for_a = d_val.clone();
        let a_combinations = a_shrinks.map(move |a| {
            (
                a,
                b_val_for_a.clone(),
                c_val_for_a.clone(),
                d_val_for_a.clone(),
            )
        });

        let b_shrinks = self.b.shrink(b_val);
        let a_val_for_b = a_val.clone();
        let c_val_for_b = c_val.clone();
        let d_val_for_b = d_val.clone();
        let b_combinations = b_shrinks.map(move |b| {
            (
                a_val_for_b.clone(),
                b,
                c_val_for_b.clone(),
                d_val_for_b.clone(),
            )
        });

        let c_shrinks = self.c.shrink(c_val);
        let a_val_for_c = a_val.clone();
        let b_val_for_c = b_val.clone();
        let d_val_for_c = d_val.clone();
        let c_combinations = c_shrinks.map(move |c| {
            (
                a_val_for_c.clone(),
                b_val_for_c.clone(),
                c,
                d_val_for_c.clone(),
            )
        });

        let d_shrinks = self.d.shrink(d_val);
        let a_val_for_d = a_val.clone();
        let b_val_for_d = b_val.clone();
        let c_val_for_d = c_val.clone();
        let d_combinations = d_shrinks.map(move |d| {
            (
                a_val_for_d.clone(),
                b_val_for_d.clone(),
                c_val_for_d.clone(),
                d,
            )
        });

        Box::new(
            a_combinations
                .chain(b_combinations)
                .chain(c_combinations)
                .chain(d_combinations),
        )
    }
}

/// A strategy for generating 5-tuples
pub struct Tuple5<A, B, C, D, E> {
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
}

impl<A, B, C, D, E> Strategy for Tuple5<A, B, C, D, E>
where
    A: Strategy,
    B: Strategy,
    C: Strategy,
    D: Strategy,
    E: Strategy,
    A::Value: Clone,
    B::Value: Clone,
    C::Value: Clone,
    D::Value: Clone,
    E::Value: Clone,
{
    type Value = (A::Value, B::Value, C::Value, D::Value, E::Value);

    fn generate<RNG: rand::Rng>(&self, rng: &mut RNG, config: &GeneratorConfig) -> Self::Value {
        let a_val = self.a.generate(rng, config);
        let b_val = self.b.generate(rng, config);
        let c_val = self.c.generate(rng, config);
        let d_val = self.d.generate(rng, config);
        let e_val = self.e.generate(rng, config);
        (a_val, b_val, c_val, d_val, e_val)
    }

    fn shrink(&self, value: &Self::Value) -> Box<dyn Iterator<Item = Self::Value>> {
        // Shrink each element independently
        let (a_val, b_val, c_val, d_val, e_val) = value;

        let a_shrinks = self.a.shrink(a_val);
        let b_val_for_a = b_val.clone();
        let c_val_for_a = c_val.clone();
        let d_val_for_a = d_val.clone();
        let e_val_for_a = e_val.clone();
        let a_combinations = a_shrinks.map(move |a| {
            (
                a,
                b_val_for_a.clone(),
                c_val_for_a.clone(),
                d_val_for_a.clone(),
                e_val_for_a.clone(),
            )
        });

        let b_shrinks = self.b.shrink(b_val);
        let a_val_for_b = a_val.clone();
        let c_val_for_b = c_val.clone();
        let d_val_for_b = d_val.clone();
        let e_val_for_b = e_val.clone();
        let b_combinations = b_shrinks.map(move |b| {
            (
                a_val_for_b.clone(),
                b,
                c_val_for_b.clone(),
                d_val_for_b.clone(),
                e_val_for_b.clone(),
            )
        });

        let c_shrinks = self.c.shrink(c_val);
        let a_val_for_c = a_val.clone();
        let b_val_for_c = b_val.clone();
        let d_val_for_c = d_val.clone();
        let e_val_for_c = e_val.clone();
        let c_combinations = c_shrinks.map(move |c| {
            (
                a_val_for_c.clone(),
                b_val_for_c.clone(),
                c,
                d_val_for_c.clone(),
                e_val_for_c.clone(),
            )
        });

        let d_shrinks = self.d.shrink(d_val);
        let a_val_for_d = a_val.clone();
        let b_val_for_d = b_val.clone();
        let c_val_for_d = c_val.clone();
        let e_val_for_d = e_val.clone();
        let d_combinations = d_shrinks.map(move |d| {
            (
                a_val_for_d.clone(),
                b_val_for_d.clone(),
                c_val_for_d.clone(),
                d,
                e_val_for_d.clone(),
            )
        });

        let e_shrinks = self.e.shrink(e_val);
        let a_val_for_e = a_val.clone();
        let b_val_for_e = b_val.clone();
        let c_val_for_e = c_val.clone();
        let d_val_for_e = d_val.clone();
        let e_combinations = e_shrinks.map(move |e| {
            (
                a_val_for_e.clone(),
                b_val_for_e.clone(),
                c_val_for_e.clone(),
                d_val_for_e.clone(),
                e,
            )
        });

        Box::new(
            a_combinations
                .chain(b_combinations)
                .chain(c_combinations)
                .chain(d_combinations)
                .chain(e_combinations),
        )
    }
}

/// Create a strategy for generating 3-tuples
pub fn tuple3<A, B, C>(a: A, b: B, c: C) -> Tuple3<A, B, C> {
    Tuple3 { a, b, c }
}

/// Create a strategy for generating 4-tuples
pub fn tuple4<A, B, C, D>(a: A, b: B, c: C, d: D) -> Tuple4<A, B, C, D> {
    Tuple4 { a, b, c, d }
}

/// Create a strategy for generating 5-tuples
pub fn tuple5<A, B, C, D, E>(a: A, b: B, c: C, d: D, e: E) -> Tuple5<A, B, C, D, E> {
    Tuple5 { a, b, c, d, e }
}

/// Create a strategy that always produces the same value
pub fn just<T: Clone>(value: T) -> Just<T> {
    Just { value }
}

/// Create a strategy that chooses from a collection of values
pub fn one_of<T: Clone>(values: Vec<T>) -> OneOf<T> {
    OneOf { values }
}

/// Create a strategy for generating values in a range
pub fn range<T>(start: T, end: T) -> Range<T>
where
    T: rand::distributions::uniform::SampleUniform + PartialOrd + Copy,
{
    Range { start, end }
}
