use std::fmt;

use serde::{Deserialize, Serialize};
use simple_error::{SimpleError, SimpleResult};

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    inputs: Vec<f64>,
    desired: u8,
}

impl TrainingExample {
    pub fn new(inputs: &[u8], desired: u8) -> SimpleResult<Self> {
        for value in inputs.iter().chain(std::iter::once(&desired)) {
            validate_binary(*value)?;
        }

        Ok(Self {
            inputs: inputs.iter().map(|x| *x as f64).collect(),
            desired,
        })
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn desired(&self) -> u8 {
        self.desired
    }
}

/// Ordered training examples sharing one input count. Iteration order is the
/// encoding order and never shuffled.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    input_count: usize,
    examples: Vec<TrainingExample>,
}

impl Dataset {
    /// Parses the flat encoding, one row of `input_count` inputs followed by the
    /// desired output per example, e.g. `[x1, x2, y, x1, x2, y, ...]`.
    pub fn from_flat(values: &[u8], input_count: usize) -> SimpleResult<Self> {
        if input_count == 0 {
            return Err(SimpleError::new("input_count must be strictly positive"));
        }

        let row_width = input_count + 1;

        if values.len() % row_width != 0 {
            return Err(SimpleError::new(format!(
                "dataset length {} is not a multiple of the example width {}",
                values.len(),
                row_width
            )));
        }

        if values.is_empty() {
            return Err(SimpleError::new("dataset must not be empty"));
        }

        Ok(Self {
            input_count,
            examples: parse_examples(values, input_count)?,
        })
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrainingExample> {
        self.examples.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicFunction {
    And,
    Or,
    Nand,
    Nor,
    Xor,
}

impl LogicFunction {
    pub fn encoding(&self) -> &'static [u8] {
        match self {
            LogicFunction::And => &[0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 1, 1],
            LogicFunction::Or => &[0, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 1],
            LogicFunction::Nand => &[0, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0],
            LogicFunction::Nor => &[0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 1, 0],
            LogicFunction::Xor => &[0, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0],
        }
    }

    pub fn input_count(&self) -> usize {
        2
    }

    /// Only XOR cannot be learned by a single threshold unit.
    pub fn is_linearly_separable(&self) -> bool {
        !matches!(self, LogicFunction::Xor)
    }

    pub fn dataset(&self) -> Dataset {
        let input_count = self.input_count();

        Dataset {
            input_count,
            examples: parse_examples(self.encoding(), input_count)
                .unwrap_or_else(|err| unreachable!("invalid {} fixture: {}", self, err)),
        }
    }
}

impl fmt::Display for LogicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogicFunction::And => "AND",
            LogicFunction::Or => "OR",
            LogicFunction::Nand => "NAND",
            LogicFunction::Nor => "NOR",
            LogicFunction::Xor => "XOR",
        };
        f.write_str(name)
    }
}

/// Splits a flat inference encoding such as `[0, 0, 0, 1, 1, 0, 1, 1]` into
/// rows of `input_count` values.
pub fn parse_input_rows(values: &[u8], input_count: usize) -> SimpleResult<Vec<Vec<f64>>> {
    if input_count == 0 {
        return Err(SimpleError::new("input_count must be strictly positive"));
    }

    if values.len() % input_count != 0 {
        return Err(SimpleError::new(format!(
            "input length {} is not a multiple of the input count {}",
            values.len(),
            input_count
        )));
    }

    for value in values {
        validate_binary(*value)?;
    }

    Ok(values
        .chunks(input_count)
        .map(|row| row.iter().map(|x| *x as f64).collect())
        .collect())
}

fn parse_examples(values: &[u8], input_count: usize) -> SimpleResult<Vec<TrainingExample>> {
    values
        .chunks(input_count + 1)
        .map(|row| TrainingExample::new(&row[..input_count], row[input_count]))
        .collect()
}

fn validate_binary(value: u8) -> SimpleResult<()> {
    if value > 1 {
        return Err(SimpleError::new(format!(
            "invalid binary value: {}",
            value
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::assert_equal;

    #[test]
    fn parse_and() {
        let sut = Dataset::from_flat(&[0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 1, 1], 2).unwrap();

        assert_eq!(sut.input_count(), 2);
        assert_eq!(sut.len(), 4);
        assert_equal(sut.iter().map(|example| example.desired()), [0, 0, 0, 1]);
        assert_eq!(sut.examples()[2].inputs(), &[1.0, 0.0]);
    }

    #[test]
    fn fixtures_match_flat_parsing() {
        for function in [
            LogicFunction::And,
            LogicFunction::Or,
            LogicFunction::Nand,
            LogicFunction::Nor,
            LogicFunction::Xor,
        ] {
            assert_eq!(
                function.dataset(),
                Dataset::from_flat(function.encoding(), 2).unwrap()
            );
        }
    }

    #[test]
    fn three_input_rows() {
        let sut = Dataset::from_flat(&[0, 0, 1, 0, 1, 1, 1, 1], 3).unwrap();

        assert_eq!(sut.len(), 2);
        assert_eq!(sut.examples()[1].inputs(), &[1.0, 1.0, 1.0]);
        assert_eq!(sut.examples()[1].desired(), 1);
    }

    #[test]
    fn length_not_multiple_of_width() {
        let result = Dataset::from_flat(&[0, 0, 0, 0, 1], 2);

        assert_eq!(
            result.unwrap_err().as_str(),
            "dataset length 5 is not a multiple of the example width 3"
        );
    }

    #[test]
    fn empty_dataset() {
        let result = Dataset::from_flat(&[], 2);

        assert_eq!(result.unwrap_err().as_str(), "dataset must not be empty");
    }

    #[test]
    fn non_binary_value() {
        let result = Dataset::from_flat(&[0, 2, 1], 2);

        assert_eq!(result.unwrap_err().as_str(), "invalid binary value: 2");
    }

    #[test]
    fn non_binary_label() {
        let result = Dataset::from_flat(&[0, 1, 3], 2);

        assert_eq!(result.unwrap_err().as_str(), "invalid binary value: 3");
    }

    #[test]
    fn input_rows() {
        let rows = parse_input_rows(&[0, 0, 0, 1, 1, 0, 1, 1], 2).unwrap();

        assert_eq!(
            rows,
            vec![
                vec![0.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0]
            ]
        );
    }

    #[test]
    fn malformed_input_rows() {
        let result = parse_input_rows(&[0, 0, 1], 2);

        assert_eq!(
            result.unwrap_err().as_str(),
            "input length 3 is not a multiple of the input count 2"
        );
    }

    #[test]
    fn separability() {
        assert!(LogicFunction::And.is_linearly_separable());
        assert!(LogicFunction::Nor.is_linearly_separable());
        assert!(!LogicFunction::Xor.is_linearly_separable());
    }
}
