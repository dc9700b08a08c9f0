//! Fair interleaving of shrink-candidate sequences (spec.md §4.6).
//!
//! Ported from `mix_generators` in
//! `hypothesis/searchstrategy/collections.py`: two queues, `active` and
//! `next_batch`. Pop from `active`; if the popped generator still yields,
//! emit the element and push the generator onto `next_batch`; otherwise
//! drop it. When `active` runs dry, swap in `next_batch` (reversed, so
//! round-robin order is preserved) and keep going.

use std::collections::VecDeque;

use super::template::Template;

type TemplateIter = Box<dyn Iterator<Item = Template>>;

/// Merge `generators` into one fair, round-robin interleaved sequence. The
/// merged sequence is a permutation of the multiset union of the inputs; no
/// single input is starved, since the merger advances each by at most one
/// element per pass over `active`. When only one input generator remains,
/// the merger degenerates into that generator directly.
pub struct MixGenerators {
    active: VecDeque<TemplateIter>,
    next_batch: VecDeque<TemplateIter>,
    solo: Option<TemplateIter>,
}

pub fn mix_generators(generators: Vec<TemplateIter>) -> MixGenerators {
    if generators.len() == 1 {
        let mut generators = generators;
        return MixGenerators {
            active: VecDeque::new(),
            next_batch: VecDeque::new(),
            solo: generators.pop(),
        };
    }
    MixGenerators {
        active: generators.into_iter().collect(),
        next_batch: VecDeque::new(),
        solo: None,
    }
}

impl Iterator for MixGenerators {
    type Item = Template;

    fn next(&mut self) -> Option<Template> {
        if let Some(solo) = &mut self.solo {
            return solo.next();
        }

        loop {
            if self.active.is_empty() {
                if self.next_batch.is_empty() {
                    return None;
                }
                // Reverse so the next pass visits generators in the same
                // relative order they were first seen.
                self.next_batch.make_contiguous().reverse();
                self.active = std::mem::take(&mut self.next_batch);
            }

            let mut generator = self.active.pop_front()?;
            match generator.next() {
                Some(item) => {
                    self.next_batch.push_back(generator);
                    return Some(item);
                }
                None => continue,
            }
        }
    }
}
