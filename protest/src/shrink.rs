//! Shrinking functionality for minimizing failing test cases.

use crate::error::PropertyError;
use std::time::{Duration, Instant};

/// Trait for types that can be shrunk to smaller values
pub trait Shrinkable {
    /// Create an iterator of shrunk values
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>>;
}

/// Result of a shrinking operation
#[derive(Debug, Clone)]
pub struct ShrinkResult<T> {
    /// Original value that failed
    pub original: T,
    /// Minimal value that still fails
    pub minimal: T,
    /// Number of shrinking steps taken
    pub shrink_steps: usize,
    /// Time spent shrinking
    pub shrink_duration: Duration,
    /// Whether shrinking was completed or timed out
    pub completed: bool,
}

impl<T> ShrinkResult<T> {
    /// Create a new shrink result
    pub fn new(
        original: T,
        minimal: T,
        shrink_steps: usize,
        shrink_duration: Duration,
        completed: bool,
    ) -> Self {
        Self {
            original,
            minimal,
            shrink_steps,
            shrink_duration,
            completed,
        }
    }

    /// Create a shrink result for when no shrinking was performed
    pub fn no_shrinking(original: T) -> Self
    where
        T: Clone,
    {
        Self {
            minimal: original.clone(),
            original,
            shrink_steps: 0,
            shrink_duration: Duration::from_secs(0),
            completed: true,
        }
    }
}

/// Configuration for shrinking behavior
#[derive(Debug, Clone)]
pub struct ShrinkConfig {
    /// Maximum number of shrinking iterations
    pub max_iterations: usize,
    /// Timeout for shrinking process
    pub timeout: Duration,
    /// Whether to enable verbose shrinking output
    pub verbose: bool,
}

impl Default for ShrinkConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            timeout: Duration::from_secs(10),
            verbose: false,
        }
    }
}

impl ShrinkConfig {
    /// Create a new shrink configuration
    pub fn new(max_iterations: usize, timeout: Duration, verbose: bool) -> Self {
        Self {
            max_iterations,
            timeout,
            verbose,
        }
    }

    /// Create a shrink configuration with custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Create a shrink configuration with custom max iterations
    pub fn with_max_iterations(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..Default::default()
        }
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

/// Shrinking engine that coordinates the shrinking process
pub struct ShrinkEngine {
    config: ShrinkConfig,
}

impl ShrinkEngine {
    /// Create a new shrinking engine with default configuration
    pub fn new() -> Self {
        Self {
            config: ShrinkConfig::default(),
        }
    }

    /// Create a new shrinking engine with custom configuration
    pub fn with_config(config: ShrinkConfig) -> Self {
        Self { config }
    }

    /// Shrink a value using a property test function
    pub fn shrink<T, F>(&self, value: T, property: F) -> ShrinkResult<T>
    where
        T: Shrinkable + Clone,
        F: Fn(&T) -> Result<(), PropertyError>,
    {
        let start_time = Instant::now();
        let mut current = value.clone();
        let mut shrink_steps = 0;
        let mut last_successful_shrink = current.clone();

        // First, verify that the original value actually fails
        if property(&current).is_ok() {
            // Original value doesn't fail, no shrinking needed
            return ShrinkResult::new(value, current, 0, start_time.elapsed(), true);
        }

        while shrink_steps < self.config.max_iterations {
            // Check timeout
            if start_time.elapsed() >= self.config.timeout {
                if self.config.verbose {
                    eprintln!("Shrinking timed out after {} steps", shrink_steps);
                }
                return ShrinkResult::new(
                    value,
                    last_successful_shrink,
                    shrink_steps,
                    start_time.elapsed(),
                    false,
                );
            }

            let mut found_smaller = false;

            // Try all shrunk values from current
            for shrunk in current.shrink() {
                // Test if this shrunk value still fails
                if property(&shrunk).is_err() {
                    // Found a smaller failing value
                    current = shrunk;
                    last_successful_shrink = current.clone();
                    shrink_steps += 1;
                    found_smaller = true;

                    if self.config.verbose {
                        eprintln!("Shrink step {}: found smaller failing value", shrink_steps);
                    }
                    break;
                }
            }

            // If no smaller failing value was found, we're done
            if !found_smaller {
                break;
            }
        }

        if self.config.verbose {
            eprintln!("Shrinking completed after {} steps", shrink_steps);
        }

        ShrinkResult::new(
            value,
            last_successful_shrink,
            shrink_steps,
            start_time.elapsed(),
            shrink_steps < self.config.max_iterations,
        )
    }

    /// Shrink a value with a custom shrinking strategy
    pub fn shrink_with_strategy<T, F, S>(
        &self,
        value: T,
        property: F,
        strategy: S,
    ) -> ShrinkResult<T>
    where
        T: Clone,
        F: Fn(&T) -> Result<(), PropertyError>,
        S: Fn(&T) -> Box<dyn Iterator<Item = T>>,
    {
        let start_time = Instant::now();
        let mut current = value.clone();
        let mut shrink_steps = 0;
        let mut last_successful_shrink = current.clone();

        // First, verify that the original value actually fails
        if property(&current).is_ok() {
            return ShrinkResult::new(value, current, 0, start_time.elapsed(), true);
        }

        while shrink_steps < self.config.max_iterations {
            // Check timeout
            if start_time.elapsed() >= self.config.timeout {
                if self.config.verbose {
                    eprintln!("Shrinking timed out after {} steps", shrink_steps);
                }
                return ShrinkResult::new(
                    value,
                    last_successful_shrink,
                    shrink_steps,
                    start_time.elapsed(),
                    false,
                );
            }

            let mut found_smaller = false;

            // Try all shrunk values using custom strategy
            for shrunk in strategy(&current) {
                // Test if this shrunk value still fails
                if property(&shrunk).is_err() {
                    // Found a smaller failing value
                    current = shrunk;
                    last_successful_shrink = current.clone();
                    shrink_steps += 1;
                    found_smaller = true;

                    if self.config.verbose {
                        eprintln!("Shrink step {}: found smaller failing value", shrink_steps);
                    }
                    break;
                }
            }

            // If no smaller failing value was found, we're done
            if !found_smaller {
                break;
            }
        }

        if self.config.verbose {
            eprintln!("Shrinking completed after {} steps", shrink_steps);
        }

        ShrinkResult::new(
            value,
            last_successful_shrink,
            shrink_steps,
            start_time.elapsed(),
            shrink_steps < self.config.max_iterations,
        )
    }
}

impl Default for ShrinkEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Async shrinking engine that coordinates the shrinking process for async properties
pub struct AsyncShrinkEngine {
    config: ShrinkConfig,
}

impl AsyncShrinkEngine {
    /// Create a new async shrinking engine with default configuration
    pub fn new() -> Self {
        Self {
            config: ShrinkConfig::default(),
        }
    }

    /// Create a new async shrinking engine with custom configuration
    pub fn with_config(config: ShrinkConfig) -> Self {
        Self { config }
    }

    /// Shrink a value using an async property test function
    pub async fn shrink<T, F, Fut>(&self, value: T, property: F) -> ShrinkResult<T>
    where
        T: Shrinkable + Clone + Send + Sync,
        F: Fn(T) -> Fut + Send + Sync,
        Fut: std::future::Future<Output = Result<(), PropertyError>> + Send,
    {
        let start_time = Instant::now();
        let mut current = value.clone();
        let mut shrink_steps = 0;
        let mut last_successful_shrink = current.clone();

        // First, verify that the original value actually fails
        if property(current.clone()).await.is_ok() {
            // Original value doesn't fail, no shrinking needed
            return ShrinkResult::new(value, current, 0, start_time.elapsed(), true);
        }

        while shrink_steps < self.config.max_iterations {
            // Check timeout
            if start_time.elapsed() >= self.config.timeout {
                if self.config.verbose {
                    eprintln!("Async shrinking timed out after {} steps", shrink_steps);
                }
                return ShrinkResult::new(
                    value,
                    last_successful_shrink,
                    shrink_steps,
                    start_time.elapsed(),
                    false,
                );
            }

            let mut found_smaller = false;

            // Try all shrunk values from current, taking the first one that fails
            // The shrinking strategies should provide candidates in order of preference
            for shrunk in current.shrink() {
                // Test if this shrunk value still fails (async)
                if property(shrunk.clone()).await.is_err() {
                    // Found a smaller failing value
                    current = shrunk;
                    last_successful_shrink = current.clone();
                    shrink_steps += 1;
                    found_smaller = true;

                    if self.config.verbose {
                        eprintln!(
                            "Async shrink step {}: found smaller failing value",
                            shrink_steps
                        );
                    }
                    break;
                }
            }

            // If no smaller failing value was found, we're done
            if !found_smaller {
                break;
            }
        }

        if self.config.verbose {
            eprintln!("Async shrinking completed after {} steps", shrink_steps);
        }

        ShrinkResult::new(
            value,
            last_successful_shrink,
            shrink_steps,
            start_time.elapsed(),
            shrink_steps < self.config.max_iterations,
        )
    }

    /// Shrink a value with a custom async shrinking strategy
    pub async fn shrink_with_strategy<T, F, Fut, S>(
        &self,
        value: T,
        property: F,
        strategy: S,
    ) -> ShrinkResult<T>
    where
        T: Clone + Send + Sync,
        F: Fn(T) -> Fut + Send + Sync,
        Fut: std::future::Future<Output = Result<(), PropertyError>> + Send,
        S: Fn(&T) -> Box<dyn Iterator<Item = T>>,
    {
        let start_time = Instant::now();
        let mut current = value.clone();
        let mut shrink_steps = 0;
        let mut last_successful_shrink = current.clone();

        // First, verify that the original value actually fails
        if property(current.clone()).await.is_ok() {
            return ShrinkResult::new(value, current, 0, start_time.elapsed(), true);
        }

        while shrink_steps < self.config.max_iterations {
            // Check timeout
            if start_time.elapsed() >= self.config.timeout {
                if self.config.verbose {
                    eprintln!(
                        "Async shrinking with strategy timed out after {} steps",
                        shrink_steps
                    );
                }
                return ShrinkResult::new(
                    value,
                    last_successful_shrink,
                    shrink_steps,
                    start_time.elapsed(),
                    false,
                );
            }

            let mut found_smaller = false;

            // Try all shrunk values using custom strategy
            for shrunk in strategy(&current) {
                // Test if this shrunk value still fails (async)
                if property(shrunk.clone()).await.is_err() {
                    // Found a smaller failing value
                    current = shrunk;
                    last_successful_shrink = current.clone();
                    shrink_steps += 1;
                    found_smaller = true;

                    if self.config.verbose {
                        eprintln!(
                            "Async shrink step {}: found smaller failing value",
                            shrink_steps
                        );
                    }
                    break;
                }
            }

            // If no smaller failing value was found, we're done
            if !found_smaller {
                break;
            }
        }

        if self.config.verbose {
            eprintln!(
                "Async shrinking with strategy completed after {} steps",
                shrink_steps
            );
        }

        ShrinkResult::new(
            value,
            last_successful_shrink,
            shrink_steps,
            start_time.elapsed(),
            shrink_steps < self.config.max_iterations,
        )
    }

    /// Shrink a value with timeout-based cancellation support
    pub async fn shrink_with_timeout<T, F, Fut>(
        &self,
        value: T,
        property: F,
        timeout: Duration,
    ) -> ShrinkResult<T>
    where
        T: Shrinkable + Clone + Send + Sync,
        F: Fn(T) -> Fut + Send + Sync,
        Fut: std::future::Future<Output = Result<(), PropertyError>> + Send,
    {
        let start_time = Instant::now();
        let mut current = value.clone();
        let mut shrink_steps = 0;
        let mut last_successful_shrink = current.clone();

        // First, verify that the original value actually fails
        if property(current.clone()).await.is_ok() {
            return ShrinkResult::new(value, current, 0, start_time.elapsed(), true);
        }

        while shrink_steps < self.config.max_iterations {
            // Check timeout (use the more restrictive of the two timeouts)
            let effective_timeout = std::cmp::min(self.config.timeout, timeout);
            if start_time.elapsed() >= effective_timeout {
                if self.config.verbose {
                    eprintln!("Async shrinking timed out after {} steps", shrink_steps);
                }
                return ShrinkResult::new(
                    value,
                    last_successful_shrink,
                    shrink_steps,
                    start_time.elapsed(),
                    false,
                );
            }

            let mut found_smaller = false;

            // Try all shrunk values from current
            for shrunk in current.shrink() {
                // Check timeout before each test
                if start_time.elapsed() >= effective_timeout {
                    return ShrinkResult::new(
                        value,
                        last_successful_shrink,
                        shrink_steps,
                        start_time.elapsed(),
                        false,
                    );
                }

                // Test if this shrunk value still fails (async)
                if property(shrunk.clone()).await.is_err() {
                    // Found a smaller failing value
                    current = shrunk;
                    last_successful_shrink = current.clone();
                    shrink_steps += 1;
                    found_smaller = true;

                    if self.config.verbose {
                        eprintln!(
                            "Async shrink step {}: found smaller failing value",
                            shrink_steps
                        );
                    }
                    break;
                }
            }

            // If no smaller failing value was found, we're done
            if !found_smaller {
                break;
            }
        }

        if self.config.verbose {
            eprintln!("Async shrinking completed after {} steps", shrink_steps);
        }

        ShrinkResult::new(
            value,
            last_successful_shrink,
            shrink_steps,
            start_time.elapsed(),
            shrink_steps < self.config.max_iterations,
        )
    }
}

impl Default for AsyncShrinkEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Basic shrinking strategies for common patterns
pub mod strategies {
    use super::*;

    /// Binary search shrinking for numeric types
    pub fn binary_search_shrink<T>(value: &T, zero: T) -> Box<dyn Iterator<Item = T> + '_>
    where
        T: Clone + PartialOrd + std::ops::Add<Output = T> + std::ops::Div<Output = T> + From<u8>,
    {
        let mut candidates = Vec::new();

        // Always try zero first if it's smaller
        if zero < *value {
            candidates.push(zero.clone());
        }

        // Binary search approach - try values between zero and current
        let mut current = value.clone();
        let two = T::from(2u8);

        while current > zero {
            let mid = (current.clone() + zero.clone()) / two.clone();
            if mid < current && mid >= zero {
                candidates.push(mid.clone());
                current = mid;
            } else {
                break;
            }
        }

        Box::new(candidates.into_iter())
    }

    /// Linear shrinking - try smaller values by decrementing
    pub fn linear_shrink<T>(value: &T, step: T, min: T) -> Box<dyn Iterator<Item = T> + '_>
    where
        T: Clone + PartialOrd + std::ops::Sub<Output = T>,
    {
        let mut candidates = Vec::new();
        let mut current = value.clone();

        while current > min {
            current = current - step.clone();
            if current >= min {
                candidates.push(current.clone());
            }
        }

        Box::new(candidates.into_iter())
    }

    /// Collection shrinking - try removing elements
    pub fn collection_shrink<T>(collection: &[T]) -> Box<dyn Iterator<Item = Vec<T>> + '_>
    where
        T: Clone,
    {
        let mut candidates = Vec::new();

        // Try empty collection first
        if !collection.is_empty() {
            candidates.push(Vec::new());
        }

        // Try removing each element
        for i in 0..collection.len() {
            let mut shrunk = collection.to_vec();
            shrunk.remove(i);
            candidates.push(shrunk);
        }

        // Try removing half the elements
        if collection.len() > 2 {
            let mid = collection.len() / 2;
            candidates.push(collection[..mid].to_vec());
            candidates.push(collection[mid..].to_vec());
        }

        Box::new(candidates.into_iter())
    }

    /// String shrinking - try shorter strings
    pub fn string_shrink(s: &str) -> Box<dyn Iterator<Item = String> + '_> {
        let mut candidates = Vec::new();

        // Try empty string first
        if !s.is_empty() {
            candidates.push(String::new());
        }

        // Try removing characters from the end
        let chars: Vec<char> = s.chars().collect();
        for i in (1..chars.len()).rev() {
            let shrunk: String = chars[..i].iter().collect();
            candidates.push(shrunk);
        }

        // Try removing characters from the beginning
        for i in 1..chars.len() {
            let shrunk: String = chars[i..].iter().collect();
            candidates.push(shrunk);
        }

        // Try removing characters from the middle
        if chars.len() > 2 {
            let mid = chars.len() / 2;
            let mut shrunk = chars.clone();
            shrunk.remove(mid);
            candidates.push(shrunk.iter().collect());
        }

        Box::new(candidates.into_iter())
    }

    /// Boolean shrinking - only try false if true
    pub fn bool_shrink(value: &bool) -> Box<dyn Iterator<Item = bool> + '_> {
        if *value {
            Box::new(std::iter::once(false))
        } else {
            Box::new(std::iter::empty())
        }
    }

    /// Character shrinking - try simpler characters
    pub fn char_shrink(c: &char) -> Box<dyn Iterator<Item = char> + '_> {
        let mut candidates = Vec::new();

        // Try common simple characters in order of preference
        let simple_chars = ['a', 'A', '0', ' ', '\0'];

        for &simple in &simple_chars {
            if simple < *c {
                candidates.push(simple);
            }
        }

        // Try characters with smaller Unicode values
        let code = *c as u32;
        if code > 0 {
            // Try some intermediate values
            for step in [code / 2, code / 4, code / 8] {
                if step > 0
                    && step < code
                    && let Some(shrunk_char) = char::from_u32(step)
                {
                    candidates.push(shrunk_char);
                }
            }
        }

        Box::new(candidates.into_iter())
    }

    /// Signed integer shrinking with negative value handling
    pub fn signed_int_shrink<T>(value: &T) -> Box<dyn Iterator<Item = T> + '_>
    where
        T: Clone
            + PartialOrd
            + std::ops::Div<Output = T>
            + std::ops::Neg<Output = T>
            + num_traits::Zero
            + num_traits::One
            + num_traits::Signed,
    {
        let mut candidates = Vec::new();
        let zero = T::zero();

        // Always try zero first
        if *value != zero {
            candidates.push(zero.clone());
        }

        if *value > zero {
            // Positive number - use binary search towards zero
            let mut current = value.clone();
            let two = T::one() + T::one();

            while current > zero {
                let mid = current.clone() / two.clone();
                if mid < current && mid >= zero {
                    candidates.push(mid.clone());
                    current = mid;
                } else {
                    break;
                }
            }
        } else if *value < zero {
            // Negative number - try moving towards zero
            let mut current = value.clone();
            let two = T::one() + T::one();

            while current < zero {
                let mid = current.clone() / two.clone();
                if mid > current && mid <= zero {
                    candidates.push(mid.clone());
                    current = mid;
                } else {
                    break;
                }
            }

            // Also try the positive version
            let positive = value.clone().neg();
            if positive > zero {
                candidates.push(positive);
            }
        }

        Box::new(candidates.into_iter())
    }

    /// Unsigned integer shrinking
    pub fn unsigned_int_shrink<T>(value: &T) -> Box<dyn Iterator<Item = T> + '_>
    where
        T: Clone + PartialOrd + std::ops::Div<Output = T> + num_traits::Zero + num_traits::One,
    {
        let mut candidates = Vec::new();
        let zero = T::zero();

        // Always try zero first
        if *value != zero {
            candidates.push(zero.clone());
        }

        // Binary search towards zero
        let mut current = value.clone();
        let two = T::one() + T::one();

        while current > zero {
            let mid = current.clone() / two.clone();
            if mid < current {
                candidates.push(mid.clone());
                current = mid;
            } else {
                break;
            }
        }

        Box::new(candidates.into_iter())
    }

    /// Float shrinking with special handling for NaN and infinity
    pub fn float_shrink<T>(value: &T) -> Box<dyn Iterator<Item = T> + '_>
    where
        T: Clone
            + PartialOrd
            + std::ops::Div<Output = T>
            + std::ops::Neg<Output = T>
            + From<f32>
            + Copy,
        T: std::fmt::Debug,
    {
        let mut candidates = Vec::new();
        let zero = T::from(0.0f32);
        let one = T::from(1.0f32);

        // Handle special float values
        if value.partial_cmp(&zero).is_none() {
            // NaN case - try zero
            candidates.push(zero);
            return Box::new(candidates.into_iter());
        }

        // Try zero first if different
        if *value != zero {
            candidates.push(zero);
        }

        // Try 1.0 and -1.0 for large values
        if *value > one {
            candidates.push(one);
        }
        let neg_one = T::from(-1.0f32);
        if *value < neg_one {
            candidates.push(neg_one);
        }

        // Binary search approach
        if *value > zero {
            let mut current = *value;
            let two = T::from(2.0f32);

            while current > zero {
                let mid = current / two;
                if mid < current {
                    candidates.push(mid);
                    current = mid;
                } else {
                    break;
                }
            }
        } else if *value < zero {
            let mut current = *value;
            let two = T::from(2.0f32);

            while current < zero {
                let mid = current / two;
                if mid > current {
                    candidates.push(mid);
                    current = mid;
                } else {
                    break;
                }
            }

            // Try positive version
            candidates.push(value.neg());
        }

        Box::new(candidates.into_iter())
    }

    /// Recursive shrinking for nested structures
    /// This provides a generic way to shrink complex nested types
    pub fn recursive_shrink<T, F>(value: &T, get_children: F) -> Box<dyn Iterator<Item = T> + '_>
    where
        T: Clone,
        F: Fn(&T) -> Vec<T> + 'static,
    {
        let mut candidates = Vec::new();

        // Get all possible shrunk versions from children
        let children = get_children(value);
        candidates.extend(children);

        Box::new(candidates.into_iter())
    }

    /// Coordinated shrinking for multiple fields
    /// This tries to shrink multiple fields in coordination, not just independently
    pub fn coordinated_field_shrink<T, F1, F2>(
        value: &T,
        field1_shrink: F1,
        field2_shrink: F2,
    ) -> Box<dyn Iterator<Item = T> + '_>
    where
        T: Clone,
        F1: Fn(&T) -> Vec<T> + 'static,
        F2: Fn(&T) -> Vec<T> + 'static,
    {
        let mut candidates = Vec::new();

        // Try shrinking field1 first
        candidates.extend(field1_shrink(value));

        // Try shrinking field2 first
        candidates.extend(field2_shrink(value));

        // Try shrinking both fields together (more aggressive)
        let field1_shrunk = field1_shrink(value);
        for intermediate in field1_shrunk {
            candidates.extend(field2_shrink(&intermediate));
        }

        Box::new(candidates.into_iter())
    }

    /// Map shrinking - try removing entries and shrinking keys/values
    pub fn map_shrink<K, V, M>(map: &M) -> Box<dyn Iterator<Item = M> + '_>
    where
        K: Clone + std::hash::Hash + Eq,
        V: Clone,
        M: Clone + std::iter::IntoIterator<Item = (K, V)> + std::iter::FromIterator<(K, V)>,
    {
        let mut candidates = Vec::new();

        // Try empty map
        candidates.push(M::from_iter(std::iter::empty()));

        // Convert to vector for easier manipulation
        let entries: Vec<(K, V)> = map.clone().into_iter().collect();

        // Try removing each entry
        for i in 0..entries.len() {
            let mut shrunk_entries = entries.clone();
            shrunk_entries.remove(i);
            candidates.push(M::from_iter(shrunk_entries));
        }

        // Try removing half the entries
        if entries.len() > 2 {
            let mid = entries.len() / 2;
            candidates.push(M::from_iter(entries[..mid].iter().cloned()));
            candidates.push(M::from_iter(entries[mid..].iter().cloned()));
        }

        Box::new(candidates.into_iter())
    }

    /// Set shrinking - try removing elements
    pub fn set_shrink<T, S>(set: &S) -> Box<dyn Iterator<Item = S> + '_>
    where
        T: Clone + std::hash::Hash + Eq,
        S: Clone + std::iter::IntoIterator<Item = T> + std::iter::FromIterator<T>,
    {
        let mut candidates = Vec::new();

        // Try empty set
        candidates.push(S::from_iter(std::iter::empty()));

        // Convert to vector for easier manipulation
        let elements: Vec<T> = set.clone().into_iter().collect();

        // Try removing each element
        for i in 0..elements.len() {
            let mut shrunk_elements = elements.clone();
            shrunk_elements.remove(i);
            candidates.push(S::from_iter(shrunk_elements));
        }

        // Try removing half the elements
        if elements.len() > 2 {
            let mid = elements.len() / 2;
            candidates.push(S::from_iter(elements[..mid].iter().cloned()));
            candidates.push(S::from_iter(elements[mid..].iter().cloned()));
        }

        Box::new(candidates.into_iter())
    }

    /// Tuple shrinking with coordination between fields
    pub fn tuple_shrink<A, B>(tuple: &(A, B)) -> Box<dyn Iterator<Item = (A, B)> + '_>
    where
        A: Shrinkable + Clone,
        B: Shrinkable + Clone,
    {
        let mut candidates = Vec::new();

        // Try shrinking first element
        for shrunk_a in tuple.0.shrink() {
            candidates.push((shrunk_a, tuple.1.clone()));
        }

        // Try shrinking second element
        for shrunk_b in tuple.1.shrink() {
            candidates.push((tuple.0.clone(), shrunk_b));
        }

        // Try shrinking both elements together (coordinated shrinking)
        for shrunk_a in tuple.0.shrink() {
            for shrunk_b in tuple.1.shrink() {
                candidates.push((shrunk_a.clone(), shrunk_b));
            }
        }

        Box::new(candidates.into_iter())
    }

    /// Nested collection shrinking - for `Vec<Vec<T>>`, `Vec<HashMap<K,V>>`, etc.
    pub fn nested_collection_shrink<T, C>(collection: &C) -> Box<dyn Iterator<Item = C> + '_>
    where
        T: Shrinkable + Clone,
        C: Clone + std::iter::IntoIterator<Item = T> + std::iter::FromIterator<T>,
    {
        let mut candidates = Vec::new();

        // Try empty collection
        candidates.push(C::from_iter(std::iter::empty()));

        // Convert to vector for manipulation
        let items: Vec<T> = collection.clone().into_iter().collect();

        // Try removing each item
        for i in 0..items.len() {
            let mut shrunk_items = items.clone();
            shrunk_items.remove(i);
            candidates.push(C::from_iter(shrunk_items));
        }

        // Try shrinking each item
        for i in 0..items.len() {
            for shrunk_item in items[i].shrink() {
                let mut shrunk_items = items.clone();
                shrunk_items[i] = shrunk_item;
                candidates.push(C::from_iter(shrunk_items));
            }
        }

        // Try removing half the items
        if items.len() > 2 {
            let mid = items.len() / 2;
            candidates.push(C::from_iter(items[..mid].iter().cloned()));
            candidates.push(C::from_iter(items[mid..].iter().cloned()));
        }

        Box::new(candidates.into_iter())
    }
}

// Implement Shrinkable for all primitive types

impl Shrinkable for bool {
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let candidates: Vec<bool> = strategies::bool_shrink(self).collect();
        Box::new(candidates.into_iter())
    }
}

impl Shrinkable for char {
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let candidates: Vec<char> = strategies::char_shrink(self).collect();
        Box::new(candidates.into_iter())
    }
}

impl Shrinkable for String {
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let candidates: Vec<String> = strategies::string_shrink(self).collect();
        Box::new(candidates.into_iter())
    }
}

// Macro to implement Shrinkable for signed integer types
macro_rules! impl_shrinkable_signed_int {
    ($($t:ty),*) => {
        $(
            impl Shrinkable for $t {
                fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
                    let candidates: Vec<$t> = strategies::signed_int_shrink(self).collect();
                    Box::new(candidates.into_iter())
                }
            }
        )*
    };
}

// Macro to implement Shrinkable for unsigned integer types
macro_rules! impl_shrinkable_unsigned_int {
    ($($t:ty),*) => {
        $(
            impl Shrinkable for $t {
                fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
                    let candidates: Vec<$t> = strategies::unsigned_int_shrink(self).collect();
                    Box::new(candidates.into_iter())
                }
            }
        )*
    };
}

// Macro to implement Shrinkable for float types
macro_rules! impl_shrinkable_float {
    ($($t:ty),*) => {
        $(
            impl Shrinkable for $t {
                fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
                    let candidates: Vec<$t> = strategies::float_shrink(self).collect();
                    Box::new(candidates.into_iter())
                }
            }
        )*
    };
}

// Apply the macros to implement Shrinkable for all primitive numeric types
impl_shrinkable_signed_int!(i8, i16, i32, i64, i128, isize);
impl_shrinkable_unsigned_int!(u8, u16, u32, u64, u128, usize);
impl_shrinkable_float!(f32, f64);

// Implement Shrinkable for Vec<T> where T: Shrinkable to handle element shrinking
impl<T: Shrinkable + Clone + 'static> Shrinkable for Vec<T> {
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut candidates: Vec<Vec<T>> = strategies::collection_shrink(self).collect();

        // Also try shrinking individual elements
        for i in 0..self.len() {
            for shrunk_element in self[i].shrink() {
                let mut shrunk_vec = self.clone();
                shrunk_vec[i] = shrunk_element;
                candidates.push(shrunk_vec);
            }
        }

        Box::new(candidates.into_iter())
    }
}

// Note: We don't implement Shrinkable for &[T] because slices are borrowed
// and we can't create new borrowed slices with different lifetimes

// Implement Shrinkable for tuples
impl<A: Shrinkable + Clone + 'static, B: Shrinkable + Clone + 'static> Shrinkable for (A, B) {
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut candidates = Vec::new();

        // Try shrinking the first element
        for shrunk_a in self.0.shrink() {
            candidates.push((shrunk_a, self.1.clone()));
        }

        // Try shrinking the second element
        for shrunk_b in self.1.shrink() {
            candidates.push((self.0.clone(), shrunk_b));
        }

        Box::new(candidates.into_iter())
    }
}

impl<
    A: Shrinkable + Clone + 'static,
    B: Shrinkable + Clone + 'static,
    C: Shrinkable + Clone + 'static,
> Shrinkable for (A, B, C)
{
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut candidates = Vec::new();

        // Try shrinking each element
        for shrunk_a in self.0.shrink() {
            candidates.push((shrunk_a, self.1.clone(), self.2.clone()));
        }

        for shrunk_b in self.1.shrink() {
            candidates.push((self.0.clone(), shrunk_b, self.2.clone()));
        }

        for shrunk_c in self.2.shrink() {
            candidates.push((self.0.clone(), self.1.clone(), shrunk_c));
        }

        Box::new(candidates.into_iter())
    }
}

// Implement Shrinkable for Option
impl<T: Shrinkable + Clone + 'static> Shrinkable for Option<T> {
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            None => Box::new(std::iter::empty()),
            Some(value) => {
                let mut candidates = vec![None]; // Always try None first

                // Try shrinking the contained value
                for shrunk in value.shrink() {
                    candidates.push(Some(shrunk));
                }

                Box::new(candidates.into_iter())
            }
        }
    }
}

// Implement Shrinkable for Result
impl<T: Shrinkable + Clone + 'static, E: Shrinkable + Clone + 'static> Shrinkable for Result<T, E> {
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut candidates = Vec::new();

        match self {
            Ok(value) => {
                // Try shrinking the Ok value
                for shrunk in value.shrink() {
                    candidates.push(Ok(shrunk));
                }
            }
            Err(error) => {
                // Try shrinking the Err value
                for shrunk in error.shrink() {
                    candidates.push(Err(shrunk));
                }
            }
        }

        Box::new(candidates.into_iter())
    }
}

// Implement Shrinkable for larger tuples
impl<A, B, C, D> Shrinkable for (A, B, C, D)
where
    A: Shrinkable + Clone + 'static,
    B: Shrinkable + Clone + 'static,
    C: Shrinkable + Clone + 'static,
    D: Shrinkable + Clone + 'static,
{
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut candidates = Vec::new();

        // Try shrinking each element independently
        for shrunk_a in self.0.shrink() {
            candidates.push((shrunk_a, self.1.clone(), self.2.clone(), self.3.clone()));
        }

        for shrunk_b in self.1.shrink() {
            candidates.push((self.0.clone(), shrunk_b, self.2.clone(), self.3.clone()));
        }

        for shrunk_c in self.2.shrink() {
            candidates.push((self.0.clone(), self.1.clone(), shrunk_c, self.3.clone()));
        }

        for shrunk_d in self.3.shrink() {
            candidates.push((self.0.clone(), self.1.clone(), self.2.clone(), shrunk_d));
        }

        Box::new(candidates.into_iter())
    }
}

impl<A, B, C, D, E> Shrinkable for (A, B, C, D, E)
where
    A: Shrinkable + Clone + 'static,
    B: Shrinkable + Clone + 'static,
    C: Shrinkable + Clone + 'static,
    D: Shrinkable + Clone + 'static,
    E: Shrinkable + Clone + 'static,
{
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut candidates = Vec::new();

        // Try shrinking each element independently
        for shrunk_a in self.0.shrink() {
            candidates.push((
                shrunk_a,
                self.1.clone(),
                self.2.clone(),
                self.3.clone(),
                self.4.clone(),
            ));
        }

        for shrunk_b in self.1.shrink() {
            candidates.push((
                self.0.clone(),
                shrunk_b,
                self.2.clone(),
                self.3.clone(),
                self.4.clone(),
            ));
        }

        for shrunk_c in self.2.shrink() {
            candidates.push((
                self.0.clone(),
                self.1.clone(),
                shrunk_c,
                self.3.clone(),
                self.4.clone(),
            ));
        }

        for shrunk_d in self.3.shrink() {
            candidates.push((
                self.0.clone(),
                self.1.clone(),
                self.2.clone(),
                shrunk_d,
                self.4.clone(),
            ));
        }

        for shrunk_e in self.4.shrink() {
            candidates.push((
                self.0.clone(),
                self.1.clone(),
                self.2.clone(),
                self.3.clone(),
                shrunk_e,
            ));
        }

        Box::new(candidates.into_iter())
    }
}

// Implement Shrinkable for HashMap
impl<K, V> Shrinkable for std::collections::HashMap<K, V>
where
    K: Shrinkable + Clone + std::hash::Hash + Eq + 'static,
    V: Shrinkable + Clone + 'static,
{
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut candidates = Vec::new();

        // Try empty map first
        if !self.is_empty() {
            candidates.push(std::collections::HashMap::new());
        }

        // Try removing each key-value pair
        for key in self.keys() {
            let mut shrunk = self.clone();
            shrunk.remove(key);
            candidates.push(shrunk);
        }

        // Try shrinking individual keys and values
        for (key, value) in self.iter() {
            // Try shrinking the key
            for shrunk_key in key.shrink() {
                if !self.contains_key(&shrunk_key) {
                    let mut shrunk_map = self.clone();
                    shrunk_map.remove(key);
                    shrunk_map.insert(shrunk_key, value.clone());
                    candidates.push(shrunk_map);
                }
            }

            // Try shrinking the value
            for shrunk_value in value.shrink() {
                let mut shrunk_map = self.clone();
                shrunk_map.insert(key.clone(), shrunk_value);
                candidates.push(shrunk_map);
            }
        }

        // Try removing half the entries
        if self.len() > 2 {
            let keys: Vec<_> = self.keys().cloned().collect();
            let mid = keys.len() / 2;

            // First half
            let mut first_half = std::collections::HashMap::new();
            for key in &keys[..mid] {
                if let Some(value) = self.get(key) {
                    first_half.insert(key.clone(), value.clone());
                }
            }
            candidates.push(first_half);

            // Second half
            let mut second_half = std::collections::HashMap::new();
            for key in &keys[mid..] {
                if let Some(value) = self.get(key) {
                    second_half.insert(key.clone(), value.clone());
                }
            }
            candidates.push(second_half);
        }

        Box::new(candidates.into_iter())
    }
}

// Implement Shrinkable for BTreeMap
impl<K, V> Shrinkable for std::collections::BTreeMap<K, V>
where
    K: Shrinkable + Clone + Ord + 'static,
    V: Shrinkable + Clone + 'static,
{
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut candidates = Vec::new();

        // Try empty map first
        if !self.is_empty() {
            candidates.push(std::collections::BTreeMap::new());
        }

        // Try removing each key-value pair
        for key in self.keys() {
            let mut shrunk = self.clone();
            shrunk.remove(key);
            candidates.push(shrunk);
        }

        // Try shrinking individual keys and values
        for (key, value) in self.iter() {
            // Try shrinking the key
            for shrunk_key in key.shrink() {
                if !self.contains_key(&shrunk_key) {
                    let mut shrunk_map = self.clone();
                    shrunk_map.remove(key);
                    shrunk_map.insert(shrunk_key, value.clone());
                    candidates.push(shrunk_map);
                }
            }

            // Try shrinking the value
            for shrunk_value in value.shrink() {
                let mut shrunk_map = self.clone();
                shrunk_map.insert(key.clone(), shrunk_value);
                candidates.push(shrunk_map);
            }
        }

        // Try removing half the entries
        if self.len() > 2 {
            let keys: Vec<_> = self.keys().cloned().collect();
            let mid = keys.len() / 2;

            // First half
            let mut first_half = std::collections::BTreeMap::new();
            for key in &keys[..mid] {
                if let Some(value) = self.get(key) {
                    first_half.insert(key.clone(), value.clone());
                }
            }
            candidates.push(first_half);

            // Second half
            let mut second_half = std::collections::BTreeMap::new();
            for key in &keys[mid..] {
                if let Some(value) = self.get(key) {
                    second_half.insert(key.clone(), value.clone());
                }
            }
            candidates.push(second_half);
        }

        Box::new(candidates.into_iter())
    }
}

// Implement Shrinkable for HashSet
impl<T> Shrinkable for std::collections::HashSet<T>
where
    T: Shrinkable + Clone + std::hash::Hash + Eq + 'static,
{
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut candidates = Vec::new();

        // Try empty set first
        if !self.is_empty() {
            candidates.push(std::collections::HashSet::new());
        }

        // Try removing each element
        for item in self.iter() {
            let mut shrunk = self.clone();
            shrunk.remove(item);
            candidates.push(shrunk);
        }

        // Try shrinking individual elements
        for item in self.iter() {
            for shrunk_item in item.shrink() {
                if !self.contains(&shrunk_item) {
                    let mut shrunk_set = self.clone();
                    shrunk_set.remove(item);
                    shrunk_set.insert(shrunk_item);
                    candidates.push(shrunk_set);
                }
            }
        }

        // Try removing half the elements
        if self.len() > 2 {
            let items: Vec<_> = self.iter().cloned().collect();
            let mid = items.len() / 2;

            // First half
            let first_half: std::collections::HashSet<_> = items[..mid].iter().cloned().collect();
            candidates.push(first_half);

            // Second half
            let second_half: std::collections::HashSet<_> = items[mid..].iter().cloned().collect();
            candidates.push(second_half);
        }

        Box::new(candidates.into_iter())
    }
}

// Implement Shrinkable for BTreeSet
impl<T> Shrinkable for std::collections::BTreeSet<T>
where
    T: Shrinkable + Clone + Ord + 'static,
{
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut candidates = Vec::new();

        // Try empty set first
        if !self.is_empty() {
            candidates.push(std::collections::BTreeSet::new());
        }

        // Try removing each element
        for item in self.iter() {
            let mut shrunk = self.clone();
            shrunk.remove(item);
            candidates.push(shrunk);
        }

        // Try shrinking individual elements
        for item in self.iter() {
            for shrunk_item in item.shrink() {
                if !self.contains(&shrunk_item) {
                    let mut shrunk_set = self.clone();
                    shrunk_set.remove(item);
                    shrunk_set.insert(shrunk_item);
                    candidates.push(shrunk_set);
                }
            }
        }

        // Try removing half the elements
        if self.len() > 2 {
            let items: Vec<_> = self.iter().cloned().collect();
            let mid = items.len() / 2;

            // First half
            let first_half: std::collections::BTreeSet<_> = items[..mid].iter().cloned().collect();
            candidates.push(first_half);

            // Second half
            let second_half: std::collections::BTreeSet<_> = items[mid..].iter().cloned().collect();
            candidates.push(second_half);
        }

        Box::new(candidates.into_iter())
    }
}
