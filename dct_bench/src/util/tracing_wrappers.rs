// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Logging macros that forward to `tracing` when the `tracing` feature is
//! enabled and compile to nothing otherwise.

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, instrument, trace};

#[cfg(not(feature = "tracing"))]
mod noop {
    // Arguments are still type-checked so that values only used for logging
    // do not trigger unused warnings.
    macro_rules! noop_log {
        ($($arg:tt)*) => {
            if false {
                let _ = format_args!($($arg)*);
            }
        };
    }
    macro_rules! debug {
        ($($arg:tt)*) => { $crate::util::tracing_wrappers::noop_log!($($arg)*) };
    }
    macro_rules! trace {
        ($($arg:tt)*) => { $crate::util::tracing_wrappers::noop_log!($($arg)*) };
    }
    pub(crate) use {debug, noop_log, trace};
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use noop::*;
