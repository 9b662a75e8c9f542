//! Univariate polynomial arithmetic over a Galois field.

use std::fmt;

use gs_galois::{FieldError, GaloisField};

use crate::errors::{PolynomialError, PolynomialResult};

/// A polynomial over one [`GaloisField`], stored as ascending coefficient
/// representations with trailing zeros trimmed.
///
/// The zero polynomial is the single coefficient `[0]`; it reports
/// `degree() == 0` and is distinguished by [`Polynomial::is_zero`].
/// Polynomials are immutable values: every operation returns a new one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial {
    field: GaloisField,
    coefficients: Vec<usize>,
}

impl Polynomial {
    /// Creates a polynomial from ascending coefficient representations.
    ///
    /// Trailing zero coefficients are trimmed; an empty vector yields the
    /// zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` (wrapped) if any coefficient
    /// is outside the field.
    pub fn new(field: &GaloisField, coefficients: Vec<usize>) -> PolynomialResult<Self> {
        for &coefficient in &coefficients {
            field.ensure_element(coefficient)?;
        }
        Ok(Self::from_vec(field.clone(), coefficients))
    }

    /// The zero polynomial.
    pub fn zero(field: &GaloisField) -> Self {
        Self::from_vec(field.clone(), vec![0])
    }

    /// The constant polynomial 1.
    pub fn one(field: &GaloisField) -> Self {
        Self::from_vec(field.clone(), vec![1])
    }

    /// A constant polynomial.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` (wrapped) if `value` is outside
    /// the field.
    pub fn constant(field: &GaloisField, value: usize) -> PolynomialResult<Self> {
        Self::new(field, vec![value])
    }

    /// The monomial `coefficient * x^degree`; a zero coefficient yields the
    /// zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` (wrapped) if `coefficient` is
    /// outside the field.
    pub fn monomial(field: &GaloisField, coefficient: usize, degree: usize) -> PolynomialResult<Self> {
        field.ensure_element(coefficient)?;
        let mut coefficients = vec![0; degree + 1];
        coefficients[degree] = coefficient;
        Ok(Self::from_vec(field.clone(), coefficients))
    }

    fn from_vec(field: GaloisField, mut coefficients: Vec<usize>) -> Self {
        while coefficients.len() > 1 && coefficients[coefficients.len() - 1] == 0 {
            coefficients.pop();
        }
        if coefficients.is_empty() {
            coefficients.push(0);
        }
        Polynomial {
            field,
            coefficients,
        }
    }

    /// The field the coefficients live in.
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// Degree of the highest nonzero coefficient; 0 for constants and for
    /// the zero polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0] == 0
    }

    /// The coefficient of `x^index`, zero beyond the stored degree.
    pub fn coefficient(&self, index: usize) -> usize {
        self.coefficients.get(index).copied().unwrap_or(0)
    }

    /// Ascending coefficient representations.
    pub fn coefficients(&self) -> &[usize] {
        &self.coefficients
    }

    pub fn leading_coefficient(&self) -> usize {
        self.coefficients[self.coefficients.len() - 1]
    }

    fn ensure_same_field(&self, other: &Polynomial) -> PolynomialResult<()> {
        if self.field == other.field {
            Ok(())
        } else {
            Err(FieldError::mismatch(&self.field, &other.field).into())
        }
    }

    /// Adds two polynomials.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` (wrapped) when the operands are
    /// over different fields.
    pub fn add(&self, other: &Polynomial) -> PolynomialResult<Polynomial> {
        self.ensure_same_field(other)?;
        let length = self.coefficients.len().max(other.coefficients.len());
        let coefficients = (0..length)
            .map(|i| self.field.add(self.coefficient(i), other.coefficient(i)))
            .collect();
        Ok(Self::from_vec(self.field.clone(), coefficients))
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` (wrapped) when the operands are
    /// over different fields.
    pub fn sub(&self, other: &Polynomial) -> PolynomialResult<Polynomial> {
        self.ensure_same_field(other)?;
        let length = self.coefficients.len().max(other.coefficients.len());
        let coefficients = (0..length)
            .map(|i| self.field.sub(self.coefficient(i), other.coefficient(i)))
            .collect();
        Ok(Self::from_vec(self.field.clone(), coefficients))
    }

    /// Multiplies two polynomials.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` (wrapped) when the operands are
    /// over different fields.
    pub fn mul(&self, other: &Polynomial) -> PolynomialResult<Polynomial> {
        self.ensure_same_field(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero(&self.field));
        }
        let mut coefficients = vec![0usize; self.degree() + other.degree() + 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coefficients.iter().enumerate() {
                coefficients[i + j] = self.field.add(coefficients[i + j], self.field.mul(a, b));
            }
        }
        Ok(Self::from_vec(self.field.clone(), coefficients))
    }

    /// Multiplies every coefficient by a scalar representation.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` (wrapped) if `scalar` is
    /// outside the field.
    pub fn mul_scalar(&self, scalar: usize) -> PolynomialResult<Polynomial> {
        self.field.ensure_element(scalar)?;
        let coefficients = self
            .coefficients
            .iter()
            .map(|&c| self.field.mul(c, scalar))
            .collect();
        Ok(Self::from_vec(self.field.clone(), coefficients))
    }

    /// Euclidean division, returning `(quotient, remainder)` with
    /// `remainder` either zero or of degree strictly below the divisor's.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if `divisor` is the zero
    /// polynomial, and `FieldError::FieldMismatch` (wrapped) on mixed
    /// fields.
    pub fn div_rem(&self, divisor: &Polynomial) -> PolynomialResult<(Polynomial, Polynomial)> {
        self.ensure_same_field(divisor)?;
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        if self.is_zero() || self.degree() < divisor.degree() {
            return Ok((Self::zero(&self.field), self.clone()));
        }

        let lead_inverse = self.field.inverse(divisor.leading_coefficient())?;
        let mut remainder = self.coefficients.clone();
        let mut quotient = vec![0usize; self.degree() - divisor.degree() + 1];
        for d in (divisor.degree()..=self.degree()).rev() {
            let coefficient = remainder[d];
            if coefficient == 0 {
                continue;
            }
            let q = self.field.mul(coefficient, lead_inverse);
            quotient[d - divisor.degree()] = q;
            for (i, &dc) in divisor.coefficients.iter().enumerate() {
                let index = d - divisor.degree() + i;
                remainder[index] = self.field.sub(remainder[index], self.field.mul(q, dc));
            }
        }
        Ok((
            Self::from_vec(self.field.clone(), quotient),
            Self::from_vec(self.field.clone(), remainder),
        ))
    }

    /// The quotient of Euclidean division.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Polynomial::div_rem`].
    pub fn div(&self, divisor: &Polynomial) -> PolynomialResult<Polynomial> {
        Ok(self.div_rem(divisor)?.0)
    }

    /// The remainder of Euclidean division.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Polynomial::div_rem`].
    pub fn rem(&self, divisor: &Polynomial) -> PolynomialResult<Polynomial> {
        Ok(self.div_rem(divisor)?.1)
    }

    /// Evaluates the polynomial at a representation using Horner's method.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` (wrapped) if `x` is outside
    /// the field.
    pub fn evaluate(&self, x: usize) -> PolynomialResult<usize> {
        self.field.ensure_element(x)?;
        let mut value = 0;
        for &coefficient in self.coefficients.iter().rev() {
            value = self.field.add(self.field.mul(value, x), coefficient);
        }
        Ok(value)
    }

    /// Multiplies by `x^positions`.
    pub fn right_shift(&self, positions: usize) -> Polynomial {
        if self.is_zero() || positions == 0 {
            return self.clone();
        }
        let mut coefficients = vec![0usize; positions];
        coefficients.extend_from_slice(&self.coefficients);
        Self::from_vec(self.field.clone(), coefficients)
    }

    /// Substitutes `x -> x^multiplier`, spreading the coefficients.
    ///
    /// # Panics
    ///
    /// Panics if `multiplier` is zero; the substitution is only defined for
    /// positive powers.
    pub fn raise_variable_degree(&self, multiplier: usize) -> Polynomial {
        assert!(multiplier >= 1, "degree multiplier must be at least 1");
        if multiplier == 1 || self.is_zero() {
            return self.clone();
        }
        let mut coefficients = vec![0usize; self.degree() * multiplier + 1];
        for (i, &coefficient) in self.coefficients.iter().enumerate() {
            coefficients[i * multiplier] = coefficient;
        }
        Self::from_vec(self.field.clone(), coefficients)
    }

    /// Greatest common divisor by the recursive Euclidean algorithm.
    ///
    /// The result is the last nonzero remainder and is not normalized to be
    /// monic; `gcd(0, 0)` is the zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` (wrapped) on mixed fields.
    pub fn gcd(a: &Polynomial, b: &Polynomial) -> PolynomialResult<Polynomial> {
        a.ensure_same_field(b)?;
        if b.is_zero() {
            return Ok(a.clone());
        }
        let remainder = a.rem(b)?;
        Self::gcd(b, &remainder)
    }

    /// Extended Euclidean algorithm, returning `(x, y, gcd)` with
    /// `a*x + b*y = gcd`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` (wrapped) on mixed fields.
    pub fn extended_gcd(
        a: &Polynomial,
        b: &Polynomial,
    ) -> PolynomialResult<(Polynomial, Polynomial, Polynomial)> {
        a.ensure_same_field(b)?;
        if b.is_zero() {
            return Ok((Self::one(&a.field), Self::zero(&a.field), a.clone()));
        }
        let (quotient, remainder) = a.div_rem(b)?;
        let (x, y, gcd) = Self::extended_gcd(b, &remainder)?;
        let next = x.sub(&quotient.mul(&y)?)?;
        Ok((y, next, gcd))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (i, &coefficient) in self.coefficients.iter().enumerate().rev() {
            if coefficient == 0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            if i == 0 || coefficient != 1 {
                write!(f, "{coefficient}")?;
            }
            if i > 0 {
                write!(f, "x")?;
                if i > 1 {
                    write!(f, "^{i}")?;
                }
            }
        }
        Ok(())
    }
}
