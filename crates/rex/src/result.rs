// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-command outcomes and the ordered result batch.

use crate::transport::TransportError;

/// Outcome of a single remote command.
#[derive(Debug, Clone, Default)]
pub struct CmdResult {
    /// The remote invocation ran to completion, successfully or not.
    pub completed: bool,
    /// Captured stdout.
    pub output: String,
    /// Captured stderr.
    pub err_output: String,
    /// Session or execution error, if any.
    pub err: Option<TransportError>,
    /// Exit status. Forced to 1 on any error: the streaming session does not
    /// expose the remote exit code.
    pub exit_status: i32,
}

impl CmdResult {
    /// True when the command ran and exited zero.
    pub fn ok(&self) -> bool {
        self.completed && self.err.is_none() && self.exit_status == 0
    }
}

/// Ordered results, index-aligned with the input command batch.
///
/// Shorter than the input when the batch stopped early: trailing entries are
/// absent, not zero-valued. Entry `i` always describes input command `i`.
#[derive(Debug, Clone, Default)]
pub struct Results(Vec<CmdResult>);

impl Results {
    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }

    pub fn push(&mut self, result: CmdResult) {
        self.0.push(result);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every recorded result succeeded.
    ///
    /// Says nothing about commands that were never attempted; callers
    /// comparing against the input batch length detect early stops.
    pub fn ok(&self) -> bool {
        self.0.iter().all(CmdResult::ok)
    }

    /// First failed result with its index, if any.
    pub fn first_error(&self) -> Option<(usize, &CmdResult)> {
        self.0.iter().enumerate().find(|(_, r)| !r.ok())
    }

    pub fn get(&self, index: usize) -> Option<&CmdResult> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CmdResult> {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Results {
    type Output = CmdResult;

    fn index(&self, index: usize) -> &CmdResult {
        &self.0[index]
    }
}

impl IntoIterator for Results {
    type Item = CmdResult;
    type IntoIter = std::vec::IntoIter<CmdResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Results {
    type Item = &'a CmdResult;
    type IntoIter = std::slice::Iter<'a, CmdResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
