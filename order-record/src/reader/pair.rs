use super::parser::Parser;

use crate::{DataPair, Result};

impl Parser<'_> {
    /// Reads a data pair, i.e., an unsigned index followed by a floating point quantity.
    pub fn read_pair(&mut self) -> Result<DataPair> {
        let index = self.read_u32("pair index")?;
        let quantity = self.read_f64("pair quantity")?;

        Ok(DataPair::new(index, quantity))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Syntax};

    use super::*;

    #[test]
    fn test_read_pairs() {
        let mut parser = Parser::new("0 0.0 1 1.1\n# next\n2\t-2.25", &Syntax::default());

        assert_eq!(parser.read_pair().unwrap(), DataPair::new(0, 0.0));
        assert_eq!(parser.read_pair().unwrap(), DataPair::new(1, 1.1));
        assert_eq!(parser.read_pair().unwrap(), DataPair::new(2, -2.25));
    }

    #[test]
    fn test_invalid_index() {
        let mut parser = Parser::new("x 1.0", &Syntax::default());

        assert_eq!(
            parser.read_pair(),
            Err(Error::UnexpectedToken {
                expected: "pair index".to_string(),
                position: 0
            })
        );
    }

    #[test]
    fn test_invalid_quantity() {
        let mut parser = Parser::new("3 abc", &Syntax::default());

        assert_eq!(
            parser.read_pair(),
            Err(Error::UnexpectedToken {
                expected: "pair quantity".to_string(),
                position: 2
            })
        );

        let mut parser = Parser::new("3 ", &Syntax::default());

        assert_eq!(
            parser.read_pair(),
            Err(Error::UnexpectedEndOfInput {
                expected: "pair quantity".to_string(),
                position: 2
            })
        );
    }
}
