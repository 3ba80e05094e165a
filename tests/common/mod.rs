//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use semsearch_core::{HashingEmbedder, Result, SemsearchError, VecEmbedder};

/// Hashing embedder whose output dimension and failure mode can be flipped mid-test,
/// standing in for a provider that gets reconfigured or goes down.
pub struct ControlledEmbedder {
    dimension: AtomicUsize,
    fail: AtomicBool,
    poison: AtomicBool,
    calls: AtomicUsize,
}

impl ControlledEmbedder {
    pub fn new(dimension: usize) -> Arc<Self> {
        Arc::new(Self {
            dimension: AtomicUsize::new(dimension),
            fail: AtomicBool::new(false),
            poison: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn set_dimension(&self, dimension: usize) {
        self.dimension.store(dimension, Ordering::SeqCst);
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Make the next embeddings contain a NaN.
    pub fn set_poisoned(&self, poison: bool) {
        self.poison.store(poison, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl VecEmbedder for ControlledEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(SemsearchError::EmbeddingFailed {
                reason: "provider unavailable".into(),
            });
        }
        let dimension = self.dimension.load(Ordering::SeqCst);
        let mut vector = HashingEmbedder::with_dimension(dimension)?.embed(text)?;
        if self.poison.load(Ordering::SeqCst) {
            vector[0] = f32::NAN;
        }
        Ok(vector)
    }

    fn model_name(&self) -> &str {
        "controlled-test-embedder"
    }
}

pub const CORPUS: &[(&str, &str)] = &[
    (
        "quantum.txt",
        "Quantum mechanics describes the behavior of particles at the atomic scale",
    ),
    (
        "classical.txt",
        "Classical mechanics describes motion of macroscopic objects",
    ),
    (
        "cells.txt",
        "Cells are the basic building blocks of all living organisms",
    ),
    (
        "atoms.txt",
        "Atoms combine to form molecules through chemical bonds",
    ),
    (
        "calculus.txt",
        "Calculus studies continuous change and rates of change",
    ),
];
