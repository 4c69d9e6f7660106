//! The interactive calculation session
//!
//! A session reads four whitespace-separated tokens, pulling a new line only
//! when the previous one is used up, and validates each token as soon as it
//! arrives. A blank line counts as one empty token. The first invalid value
//! ends the session: its error line is written and nothing further is read.
//! When all four are valid the BMR is calculated and written as a single line.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use bmr_calculator_shared::{
    calculate_bmr, validate_field, BiologicalSex, BmrMethod, BmrProfile, BmrResult, Field,
    FieldValue, InputError,
};
use tracing::{debug, info, warn};

use crate::config::{AppConfig, InputOrder, OutputConfig};
use crate::output::{render_error, render_result};

/// How a session ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Computed(BmrResult),
    Rejected(InputError),
}

impl Outcome {
    /// Process exit code: 0 for a result, 1 for rejected input
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Computed(_) => 0,
            Outcome::Rejected(_) => 1,
        }
    }
}

/// One run of the calculator
#[derive(Debug, Clone)]
pub struct Session {
    method: BmrMethod,
    order: InputOrder,
    output: OutputConfig,
    prompts: bool,
}

impl Session {
    /// `interactive` says whether input comes from a terminal; it only
    /// matters when prompts are set to `auto`.
    pub fn new(config: &AppConfig, interactive: bool) -> Self {
        Self {
            method: config.calculation.method,
            order: config.calculation.input_order,
            output: config.output.clone(),
            prompts: config.output.prompts.enabled(interactive),
        }
    }

    /// Read, validate and calculate, writing prompts and the result line to
    /// `output`.
    ///
    /// Rejected input is a normal outcome. `Err` is returned only when the
    /// streams themselves fail.
    pub fn run<R, W>(&self, mut input: R, mut output: W) -> Result<Outcome>
    where
        R: BufRead,
        W: Write,
    {
        let outcome = match self.collect(&mut input, &mut output)? {
            Ok(profile) => {
                let result = calculate_bmr(&profile, self.method);
                info!(
                    bmr = result.kcal_per_day,
                    method = %result.method,
                    "BMR calculated"
                );
                writeln!(output, "{}", render_result(&result, &self.output)?)
                    .context("failed to write result")?;
                Outcome::Computed(result)
            }
            Err(err) => {
                warn!(field = %err.field(), code = err.code(), "Input rejected");
                writeln!(output, "{}", render_error(&err, self.output.format)?)
                    .context("failed to write error")?;
                Outcome::Rejected(err)
            }
        };

        output.flush().context("failed to flush output")?;
        Ok(outcome)
    }

    /// Read fields in order, stopping at the first invalid one
    fn collect<R, W>(&self, input: &mut R, output: &mut W) -> Result<Result<BmrProfile, InputError>>
    where
        R: BufRead,
        W: Write,
    {
        let mut values = Collected::default();
        let mut pending = VecDeque::new();

        for field in self.order.fields() {
            let raw = match self.next_token(field, &mut pending, input, output)? {
                Ok(raw) => raw,
                Err(err) => return Ok(Err(err)),
            };

            match validate_field(field, &raw) {
                Ok(value) => {
                    debug!(%field, ?value, "Field accepted");
                    values.set(field, value);
                }
                Err(err) => return Ok(Err(err)),
            }
        }

        Ok(values.into_profile())
    }

    /// Next token for `field`.
    ///
    /// Tokens left over from the current line are used first. Otherwise the
    /// prompt is written and one more line is read. End of input is
    /// `Missing`; a line that is not valid UTF-8 is `Malformed`.
    fn next_token<R, W>(
        &self,
        field: Field,
        pending: &mut VecDeque<String>,
        input: &mut R,
        output: &mut W,
    ) -> Result<Result<String, InputError>>
    where
        R: BufRead,
        W: Write,
    {
        if let Some(token) = pending.pop_front() {
            return Ok(Ok(token));
        }

        if self.prompts {
            write!(output, "{}", field.prompt()).context("failed to write prompt")?;
            output.flush().context("failed to flush prompt")?;
        }

        let mut bytes = Vec::new();
        let read = input
            .read_until(b'\n', &mut bytes)
            .with_context(|| format!("failed to read {}", field))?;
        if read == 0 {
            debug!(%field, "Input ended");
            return Ok(Err(InputError::Missing { field }));
        }

        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(err) => {
                let value = String::from_utf8_lossy(err.as_bytes()).trim().to_string();
                debug!(%field, "Line is not valid UTF-8");
                return Ok(Err(InputError::Malformed { field, value }));
            }
        };

        pending.extend(line.split_whitespace().map(str::to_string));
        // a blank line still answers the field
        Ok(Ok(pending.pop_front().unwrap_or_default()))
    }
}

#[derive(Debug, Default)]
struct Collected {
    age: Option<u32>,
    height: Option<u32>,
    weight: Option<u32>,
    sex: Option<BiologicalSex>,
}

impl Collected {
    fn set(&mut self, field: Field, value: FieldValue) {
        match (field, value) {
            (Field::Age, FieldValue::Number(n)) => self.age = Some(n),
            (Field::Height, FieldValue::Number(n)) => self.height = Some(n),
            (Field::Weight, FieldValue::Number(n)) => self.weight = Some(n),
            (_, FieldValue::Sex(sex)) => self.sex = Some(sex),
            // validate_field never pairs gender with a number
            (Field::Gender, FieldValue::Number(_)) => {}
        }
    }

    fn into_profile(self) -> Result<BmrProfile, InputError> {
        let age = self.age.ok_or(InputError::Missing { field: Field::Age })?;
        let height = self.height.ok_or(InputError::Missing { field: Field::Height })?;
        let weight = self.weight.ok_or(InputError::Missing { field: Field::Weight })?;
        let sex = self.sex.ok_or(InputError::Missing { field: Field::Gender })?;
        BmrProfile::new(age.into(), height.into(), weight.into(), sex)
    }
}
