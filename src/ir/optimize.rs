//! # IR Optimizer
//!
//! Optimization passes for text-mode programs.
//!
//! ## Optimization Passes
//!
//! 1. **Remove redundant init**: Only keep the first Init op
//! 2. **Collapse style toggles**: `SetBold(false), SetBold(true)` → `SetBold(true)`
//! 3. **Remove redundant styles**: Don't emit SetBold(true) if already bold
//! 4. **Merge adjacent text / advances**: One op instead of several
//!
//! Graphics ops are never touched. Bitmap documents are emitted without
//! optimization anyway, since their byte layout is a fixed contract.

use super::ops::{Op, Program, StyleState};

impl Program {
    /// Apply all optimization passes.
    pub fn optimize(self) -> Self {
        let ops = self.ops;
        let ops = remove_redundant_init(ops);
        let ops = collapse_style_toggles(ops);
        let ops = remove_redundant_styles(ops);
        let ops = merge_adjacent(ops);
        Program { ops }
    }
}

/// Remove duplicate Init ops, keeping only the first one.
fn remove_redundant_init(ops: Vec<Op>) -> Vec<Op> {
    let mut seen_init = false;
    ops.into_iter()
        .filter(|op| {
            if matches!(op, Op::Init) {
                if seen_init {
                    return false;
                }
                seen_init = true;
            }
            true
        })
        .collect()
}

/// Drop an "off" that is immediately overridden by the matching "on".
fn collapse_style_toggles(ops: Vec<Op>) -> Vec<Op> {
    let mut result: Vec<Op> = Vec::with_capacity(ops.len());

    for op in ops {
        let overridden = matches!(
            (result.last(), &op),
            (Some(Op::SetBold(false)), Op::SetBold(true))
                | (Some(Op::SetDoubleWidth(false)), Op::SetDoubleWidth(true))
                | (Some(Op::SetCondensed(false)), Op::SetCondensed(true))
                | (Some(Op::SetChineseMode(false)), Op::SetChineseMode(true))
        );
        if overridden {
            result.pop();
        }
        result.push(op);
    }

    result
}

/// Remove style changes that don't change the current state.
fn remove_redundant_styles(ops: Vec<Op>) -> Vec<Op> {
    let mut result = Vec::with_capacity(ops.len());
    let mut state = StyleState::default();

    for op in ops {
        let keep = match &op {
            Op::Init => {
                state = StyleState::default();
                true
            }
            Op::SetBold(b) => replace(&mut state.bold, *b),
            Op::SetDoubleWidth(b) => replace(&mut state.double_width, *b),
            Op::SetCondensed(b) => replace(&mut state.condensed, *b),
            Op::SetChineseMode(b) => replace(&mut state.chinese_mode, *b),
            Op::SetPitch(p) => replace(&mut state.pitch, *p),
            _ => true,
        };
        if keep {
            result.push(op);
        }
    }

    result
}

/// Set `slot` to `value`, returning whether it changed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// Merge consecutive Text ops and consecutive Advance ops.
fn merge_adjacent(ops: Vec<Op>) -> Vec<Op> {
    let mut result: Vec<Op> = Vec::with_capacity(ops.len());

    for op in ops {
        let merged = match (result.last_mut(), &op) {
            (Some(Op::Text(prev)), Op::Text(next)) => {
                prev.push_str(next);
                true
            }
            (Some(Op::Advance(prev)), Op::Advance(next)) => {
                *prev += *next;
                true
            }
            _ => false,
        };
        if !merged {
            result.push(op);
        }
    }

    result
}
