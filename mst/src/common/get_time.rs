// ============================================================================
// This code is part of Rusty-MST.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::time::{ Instant, Duration };

use crate::common::macros::verbose_println;

/// Times the consecutive phases of a computation.
///
/// Phase reports are printed only with the `verbose` feature.
pub struct Timer<'a> {
    last: Instant,
    name: &'a str,
}

impl<'a> Timer<'a> {
    /// Creates a timer that starts running immediately.
    pub fn new(name: &'a str) -> Self {
        Timer { last: Instant::now(), name }
    }

    /// Reports and returns the time spent in `phase`, i.e. since `new`
    /// or the previous `next`.
    pub fn next(&mut self, phase: &str) -> Duration {
        let t = Instant::now();
        let d = t - self.last;
        self.last = t;
        verbose_println!("{}:{}:\t{:.6}", self.name, phase, d.as_secs_f64());
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn phases_are_measured_from_the_previous_phase() {
        let mut t = Timer::new("test");
        sleep(Duration::from_millis(20));
        let first = t.next("first");
        let second = t.next("second");
        assert!(first >= Duration::from_millis(20));
        assert!(second < first);
    }
}
