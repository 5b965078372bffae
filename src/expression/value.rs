use crate::expression::errors::ParseError;

/// Result of evaluating an expression.
///
/// Arithmetic stays [`Value::Exact`] as long as the result fits an `i64`:
/// inexact division and any overflowing operation degrade to
/// [`Value::Approx`]. Keeping the two cases apart makes the tolerance
/// comparison at the search leaves an explicit step instead of incidental
/// floating-point behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Exact(i64),
    Approx(f64),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Exact(n) => n as f64,
            Value::Approx(x) => x,
        }
    }

    /// Whether the value lies strictly within `tolerance` of `target`.
    pub fn approx_eq(self, target: f64, tolerance: f64) -> bool {
        (self.as_f64() - target).abs() < tolerance
    }

    pub(crate) fn add(self, rhs: Value) -> Value {
        if let (Value::Exact(a), Value::Exact(b)) = (self, rhs)
            && let Some(sum) = a.checked_add(b)
        {
            return Value::Exact(sum);
        }
        Value::Approx(self.as_f64() + rhs.as_f64())
    }

    pub(crate) fn sub(self, rhs: Value) -> Value {
        if let (Value::Exact(a), Value::Exact(b)) = (self, rhs)
            && let Some(difference) = a.checked_sub(b)
        {
            return Value::Exact(difference);
        }
        Value::Approx(self.as_f64() - rhs.as_f64())
    }

    pub(crate) fn mul(self, rhs: Value) -> Value {
        if let (Value::Exact(a), Value::Exact(b)) = (self, rhs)
            && let Some(product) = a.checked_mul(b)
        {
            return Value::Exact(product);
        }
        Value::Approx(self.as_f64() * rhs.as_f64())
    }

    pub(crate) fn try_div(self, rhs: Value) -> Result<Value, ParseError> {
        match (self, rhs) {
            (_, Value::Exact(0)) => Err(ParseError::DivisionByZero),
            // checked_rem also rules out the i64::MIN / -1 overflow
            (Value::Exact(a), Value::Exact(b)) if a.checked_rem(b) == Some(0) => {
                Ok(Value::Exact(a / b))
            }
            _ => {
                let divisor = rhs.as_f64();
                if divisor.abs() < f64::EPSILON {
                    return Err(ParseError::DivisionByZero);
                }
                Ok(Value::Approx(self.as_f64() / divisor))
            }
        }
    }
}
