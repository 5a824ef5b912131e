/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::trace::TARGET;
use chrono::{SecondsFormat, Utc};
use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::Once;

/// Declares how [init_with] sets up the bundled sink
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TraceOptions {
    /// Most verbose level let through. Per-call records are `Debug`,
    /// domain violations are `Warn`.
    pub max_level: LevelFilter,
    /// Prefix every line with a UTC timestamp.
    pub timestamps: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            max_level: LevelFilter::Debug,
            timestamps: true,
        }
    }
}

/// Writes one line per record to standard error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StderrSink {
    timestamps: bool,
}

static STAMPED: StderrSink = StderrSink { timestamps: true };
static PLAIN: StderrSink = StderrSink { timestamps: false };
static INIT: Once = Once::new();

impl StderrSink {
    /// Sink prefixing lines with a UTC timestamp when `timestamps` is set.
    pub const fn new(timestamps: bool) -> StderrSink {
        StderrSink { timestamps }
    }

    /// Formats one record as a single line into `w`.
    pub fn write_record<W: Write>(&self, w: &mut W, record: &Record) -> std::io::Result<()> {
        if self.timestamps {
            write!(
                w,
                "{} ",
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
            )?;
        }
        writeln!(
            w,
            "{:<5} {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for StderrSink {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr().lock();
            // Nowhere to report a failing stderr.
            let _ = self.write_record(&mut stderr, record);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Installs the stderr sink with [TraceOptions::default].
pub fn init() {
    init_with(TraceOptions::default());
}

/// Installs the stderr sink once and emits the startup line.
///
/// Later calls do nothing. A logger installed by the host before the
/// first call is kept together with its level, and `options` is ignored.
pub fn init_with(options: TraceOptions) {
    INIT.call_once(|| {
        let sink: &'static StderrSink = if options.timestamps {
            &STAMPED
        } else {
            &PLAIN
        };
        if log::set_logger(sink).is_ok() {
            log::set_max_level(options.max_level);
        }
        log::info!(
            target: TARGET,
            "scalarmath initialized ({} build)",
            if cfg!(feature = "trace") {
                "traced"
            } else {
                "reference"
            }
        );
    });
}
