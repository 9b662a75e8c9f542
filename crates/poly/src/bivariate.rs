// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Sparse bivariate polynomial arithmetic over a Galois field.

use std::collections::BTreeMap;
use std::fmt;

use gs_galois::{FieldError, GaloisField};

use crate::combinations::CombinationsCalculator;
use crate::errors::PolynomialResult;
use crate::univariate::Polynomial;

/// A polynomial in two variables over one [`GaloisField`], stored as a
/// sparse map from `(x_degree, y_degree)` to a nonzero coefficient
/// representation.
///
/// The zero polynomial is the empty map. The `BTreeMap` keeps monomials in
/// a deterministic order, so iteration and `Debug` output are stable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BivariatePolynomial {
    field: GaloisField,
    monomials: BTreeMap<(usize, usize), usize>,
}

impl BivariatePolynomial {
    /// Creates a polynomial from `((x_degree, y_degree), coefficient)`
    /// entries. Duplicate keys are accumulated with field addition; zero
    /// coefficients are dropped.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` (wrapped) if any coefficient
    /// is outside the field.
    pub fn new(
        field: &GaloisField,
        entries: impl IntoIterator<Item = ((usize, usize), usize)>,
    ) -> PolynomialResult<Self> {
        let mut monomials: BTreeMap<(usize, usize), usize> = BTreeMap::new();
        for (key, coefficient) in entries {
            field.ensure_element(coefficient)?;
            let entry = monomials.entry(key).or_insert(0);
            *entry = field.add(*entry, coefficient);
        }
        monomials.retain(|_, coefficient| *coefficient != 0);
        Ok(BivariatePolynomial {
            field: field.clone(),
            monomials,
        })
    }

    /// The zero polynomial.
    pub fn zero(field: &GaloisField) -> Self {
        BivariatePolynomial {
            field: field.clone(),
            monomials: BTreeMap::new(),
        }
    }

    /// The constant polynomial 1.
    pub fn one(field: &GaloisField) -> Self {
        let mut monomials = BTreeMap::new();
        monomials.insert((0, 0), 1);
        BivariatePolynomial {
            field: field.clone(),
            monomials,
        }
    }

    /// The monomial `coefficient * x^x_degree * y^y_degree`; a zero
    /// coefficient yields the zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` (wrapped) if `coefficient` is
    /// outside the field.
    pub fn monomial(
        field: &GaloisField,
        coefficient: usize,
        x_degree: usize,
        y_degree: usize,
    ) -> PolynomialResult<Self> {
        Self::new(field, [((x_degree, y_degree), coefficient)])
    }

    /// The field the coefficients live in.
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    pub fn is_zero(&self) -> bool {
        self.monomials.is_empty()
    }

    /// The coefficient of `x^x_degree * y^y_degree`, zero when absent.
    pub fn coefficient(&self, x_degree: usize, y_degree: usize) -> usize {
        self.monomials
            .get(&(x_degree, y_degree))
            .copied()
            .unwrap_or(0)
    }

    /// Iterates the nonzero monomials as `((x_degree, y_degree),
    /// coefficient)` in ascending key order.
    pub fn monomials(&self) -> impl Iterator<Item = ((usize, usize), usize)> + '_ {
        self.monomials
            .iter()
            .map(|(&degrees, &coefficient)| (degrees, coefficient))
    }

    /// The largest x-degree over all monomials; 0 for the zero polynomial.
    pub fn x_degree(&self) -> usize {
        self.monomials.keys().map(|&(i, _)| i).max().unwrap_or(0)
    }

    /// The largest y-degree over all monomials; 0 for the zero polynomial.
    pub fn y_degree(&self) -> usize {
        self.monomials.keys().map(|&(_, j)| j).max().unwrap_or(0)
    }

    fn ensure_same_field(&self, other: &GaloisField) -> PolynomialResult<()> {
        if self.field == *other {
            Ok(())
        } else {
            Err(FieldError::mismatch(&self.field, other).into())
        }
    }

    /// Adds two polynomials.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` (wrapped) when the operands are
    /// over different fields.
    pub fn add(&self, other: &BivariatePolynomial) -> PolynomialResult<BivariatePolynomial> {
        self.ensure_same_field(&other.field)?;
        let mut monomials = self.monomials.clone();
        for (&key, &coefficient) in &other.monomials {
            let entry = monomials.entry(key).or_insert(0);
            *entry = self.field.add(*entry, coefficient);
        }
        monomials.retain(|_, coefficient| *coefficient != 0);
        Ok(BivariatePolynomial {
            field: self.field.clone(),
            monomials,
        })
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` (wrapped) when the operands are
    /// over different fields.
    pub fn sub(&self, other: &BivariatePolynomial) -> PolynomialResult<BivariatePolynomial> {
        self.ensure_same_field(&other.field)?;
        let mut monomials = self.monomials.clone();
        for (&key, &coefficient) in &other.monomials {
            let entry = monomials.entry(key).or_insert(0);
            *entry = self.field.sub(*entry, coefficient);
        }
        monomials.retain(|_, coefficient| *coefficient != 0);
        Ok(BivariatePolynomial {
            field: self.field.clone(),
            monomials,
        })
    }

    /// Multiplies two polynomials by convolution over the monomial keys.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` (wrapped) when the operands are
    /// over different fields.
    pub fn mul(&self, other: &BivariatePolynomial) -> PolynomialResult<BivariatePolynomial> {
        self.ensure_same_field(&other.field)?;
        let mut monomials: BTreeMap<(usize, usize), usize> = BTreeMap::new();
        for (&(i1, j1), &a) in &self.monomials {
            for (&(i2, j2), &b) in &other.monomials {
                let product = self.field.mul(a, b);
                let entry = monomials.entry((i1 + i2, j1 + j2)).or_insert(0);
                *entry = self.field.add(*entry, product);
            }
        }
        monomials.retain(|_, coefficient| *coefficient != 0);
        Ok(BivariatePolynomial {
            field: self.field.clone(),
            monomials,
        })
    }

    /// Multiplies every coefficient by a scalar representation.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` (wrapped) if `scalar` is
    /// outside the field.
    pub fn mul_scalar(&self, scalar: usize) -> PolynomialResult<BivariatePolynomial> {
        self.field.ensure_element(scalar)?;
        if scalar == 0 {
            return Ok(Self::zero(&self.field));
        }
        let monomials = self
            .monomials
            .iter()
            .map(|(&key, &coefficient)| (key, self.field.mul(coefficient, scalar)))
            .collect();
        Ok(BivariatePolynomial {
            field: self.field.clone(),
            monomials,
        })
    }

    /// Evaluates the polynomial at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` (wrapped) if either
    /// representation is outside the field.
    pub fn evaluate(&self, x: usize, y: usize) -> PolynomialResult<usize> {
        self.field.ensure_element(x)?;
        self.field.ensure_element(y)?;
        let mut value = 0;
        for (&(i, j), &coefficient) in &self.monomials {
            let powers = self.field.mul(self.field.pow(x, i), self.field.pow(y, j));
            value = self.field.add(value, self.field.mul(coefficient, powers));
        }
        Ok(value)
    }

    /// Substitutes `x = x0`, collapsing to a univariate polynomial in y.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` (wrapped) if `x0` is outside
    /// the field.
    pub fn evaluate_x(&self, x0: usize) -> PolynomialResult<Polynomial> {
        self.field.ensure_element(x0)?;
        let mut coefficients = vec![0usize; self.y_degree() + 1];
        for (&(i, j), &coefficient) in &self.monomials {
            let term = self.field.mul(coefficient, self.field.pow(x0, i));
            coefficients[j] = self.field.add(coefficients[j], term);
        }
        Polynomial::new(&self.field, coefficients)
    }

    /// Substitutes `y = y0`, collapsing to a univariate polynomial in x.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` (wrapped) if `y0` is outside
    /// the field.
    pub fn evaluate_y(&self, y0: usize) -> PolynomialResult<Polynomial> {
        self.field.ensure_element(y0)?;
        let mut coefficients = vec![0usize; self.x_degree() + 1];
        for (&(i, j), &coefficient) in &self.monomials {
            let term = self.field.mul(coefficient, self.field.pow(y0, j));
            coefficients[i] = self.field.add(coefficients[i], term);
        }
        Polynomial::new(&self.field, coefficients)
    }

    /// Composes the polynomial with two substitution polynomials,
    /// replacing x by `x_sub` and y by `y_sub`.
    ///
    /// Powers of each substitution polynomial are built once into a
    /// degree-indexed ladder, so each is computed a single time however
    /// many monomials share a degree.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` (wrapped) when a substitution
    /// polynomial is over a different field.
    pub fn substitute(
        &self,
        x_sub: &BivariatePolynomial,
        y_sub: &BivariatePolynomial,
    ) -> PolynomialResult<BivariatePolynomial> {
        self.ensure_same_field(&x_sub.field)?;
        self.ensure_same_field(&y_sub.field)?;
        let x_powers = self.power_ladder(x_sub, self.x_degree())?;
        let y_powers = self.power_ladder(y_sub, self.y_degree())?;
        let mut result = Self::zero(&self.field);
        for (&(i, j), &coefficient) in &self.monomials {
            let term = x_powers[i].mul(&y_powers[j])?.mul_scalar(coefficient)?;
            result = result.add(&term)?;
        }
        Ok(result)
    }

    fn power_ladder(
        &self,
        base: &BivariatePolynomial,
        up_to: usize,
    ) -> PolynomialResult<Vec<BivariatePolynomial>> {
        let mut current = Self::one(&self.field);
        let mut ladder = Vec::with_capacity(up_to + 1);
        ladder.push(current.clone());
        for _ in 0..up_to {
            current = current.mul(base)?;
            ladder.push(current.clone());
        }
        Ok(ladder)
    }

    /// Divides out the largest power of x that divides every monomial.
    /// Identity on the zero polynomial and on polynomials with an
    /// x-independent term.
    pub fn divide_by_max_possible_x_degree(&self) -> BivariatePolynomial {
        let shift = match self.monomials.keys().map(|&(i, _)| i).min() {
            Some(shift) if shift > 0 => shift,
            _ => return self.clone(),
        };
        let monomials = self
            .monomials
            .iter()
            .map(|(&(i, j), &coefficient)| ((i - shift, j), coefficient))
            .collect();
        BivariatePolynomial {
            field: self.field.clone(),
            monomials,
        }
    }

    /// Evaluates the (r, s) Hasse derivative at `(x0, y0)`:
    ///
    /// ```text
    /// Σ over monomials (i, j), i ≥ r, j ≥ s:
    ///     C(i, r) · C(j, s) · coeff(i, j) · x0^(i-r) · y0^(j-s)
    /// ```
    ///
    /// The binomial coefficients are taken in the field through `calc`,
    /// which memoizes them across calls. In fields of characteristic p
    /// this is the derivative notion that stays meaningful where the
    /// ordinary formal derivative collapses.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` (wrapped) if `x0` or `y0` is
    /// outside the field, and `FieldError::FieldMismatch` (wrapped) when
    /// `calc` is bound to a different field.
    pub fn hasse_derivative(
        &self,
        r: usize,
        s: usize,
        x0: usize,
        y0: usize,
        calc: &mut CombinationsCalculator,
    ) -> PolynomialResult<usize> {
        self.field.ensure_element(x0)?;
        self.field.ensure_element(y0)?;
        self.ensure_same_field(calc.field())?;
        let mut value = 0;
        for (&(i, j), &coefficient) in &self.monomials {
            if i < r || j < s {
                continue;
            }
            let binomials = self.field.mul(calc.binomial(i, r), calc.binomial(j, s));
            if binomials == 0 {
                continue;
            }
            let powers = self
                .field
                .mul(self.field.pow(x0, i - r), self.field.pow(y0, j - s));
            let term = self.field.mul(coefficient, self.field.mul(binomials, powers));
            value = self.field.add(value, term);
        }
        Ok(value)
    }
}

impl fmt::Display for BivariatePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (&(i, j), &coefficient) in self.monomials.iter().rev() {
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            if (i == 0 && j == 0) || coefficient != 1 {
                write!(f, "{coefficient}")?;
            }
            if i > 0 {
                write!(f, "x")?;
                if i > 1 {
                    write!(f, "^{i}")?;
                }
            }
            if j > 0 {
                write!(f, "y")?;
                if j > 1 {
                    write!(f, "^{j}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PolynomialError;

    fn gf7() -> GaloisField {
        GaloisField::cached(7).unwrap()
    }

    fn gf8() -> GaloisField {
        GaloisField::cached(8).unwrap()
    }

    #[test]
    fn test_creation_merges_and_drops_zero_terms() {
        let field = gf7();
        let poly =
            BivariatePolynomial::new(&field, [((1, 0), 3), ((1, 0), 3), ((0, 2), 0)]).unwrap();
        assert_eq!(poly.coefficient(1, 0), 6);
        assert_eq!(poly.coefficient(0, 2), 0);

        // Accumulation in characteristic 2 can cancel a term entirely.
        let cancelled = BivariatePolynomial::new(&gf8(), [((1, 1), 3), ((1, 1), 3)]).unwrap();
        assert!(cancelled.is_zero());
    }

    #[test]
    fn test_invalid_coefficient_rejected() {
        assert!(matches!(
            BivariatePolynomial::new(&gf7(), [((0, 0), 7)]),
            Err(PolynomialError::Field(FieldError::NotFieldElement { .. }))
        ));
    }

    #[test]
    fn test_degrees() {
        let field = gf7();
        let poly = BivariatePolynomial::new(&field, [((3, 1), 2), ((0, 4), 5)]).unwrap();
        assert_eq!(poly.x_degree(), 3);
        assert_eq!(poly.y_degree(), 4);
        assert_eq!(BivariatePolynomial::zero(&field).x_degree(), 0);
    }

    #[test]
    fn test_add_and_sub() {
        let field = gf7();
        let a = BivariatePolynomial::new(&field, [((1, 0), 3), ((0, 1), 2)]).unwrap();
        let b = BivariatePolynomial::new(&field, [((1, 0), 4), ((2, 2), 1)]).unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.coefficient(1, 0), 0);
        assert_eq!(sum.coefficient(0, 1), 2);
        assert_eq!(sum.coefficient(2, 2), 1);
        assert_eq!(sum.sub(&b).unwrap(), a);
        assert!(a.sub(&a).unwrap().is_zero());
    }

    #[test]
    fn test_mul() {
        let field = gf8();
        // (x + y)^2 = x^2 + y^2 in characteristic 2.
        let sum = BivariatePolynomial::new(&field, [((1, 0), 1), ((0, 1), 1)]).unwrap();
        let square = sum.mul(&sum).unwrap();
        let expected = BivariatePolynomial::new(&field, [((2, 0), 1), ((0, 2), 1)]).unwrap();
        assert_eq!(square, expected);
    }

    #[test]
    fn test_mul_scalar() {
        let field = gf7();
        let poly = BivariatePolynomial::new(&field, [((1, 1), 3), ((0, 0), 2)]).unwrap();
        let doubled = poly.mul_scalar(2).unwrap();
        assert_eq!(doubled.coefficient(1, 1), 6);
        assert_eq!(doubled.coefficient(0, 0), 4);
        assert!(poly.mul_scalar(0).unwrap().is_zero());
    }

    #[test]
    fn test_evaluate() {
        let field = gf7();
        // x^2 y + 3 at (2, 3): 4 * 3 + 3 = 15 = 1 (mod 7)
        let poly = BivariatePolynomial::new(&field, [((2, 1), 1), ((0, 0), 3)]).unwrap();
        assert_eq!(poly.evaluate(2, 3).unwrap(), 1);
        assert_eq!(BivariatePolynomial::zero(&field).evaluate(5, 6).unwrap(), 0);
    }

    #[test]
    fn test_partial_evaluation() {
        let field = gf7();
        // Q = x y^2 + 2x + y
        let q = BivariatePolynomial::new(&field, [((1, 2), 1), ((1, 0), 2), ((0, 1), 1)]).unwrap();
        let in_y = q.evaluate_x(3).unwrap();
        assert_eq!(in_y.coefficients(), &[6, 1, 3]);
        let in_x = q.evaluate_y(2).unwrap();
        assert_eq!(in_x.coefficients(), &[2, 6]);
    }

    #[test]
    fn test_substitute() {
        let field = gf8();
        // Q = x y + y^2 under x -> x, y -> 1 + x y becomes
        // 1 + x + x^2 y + x^2 y^2 in characteristic 2.
        let q = BivariatePolynomial::new(&field, [((1, 1), 1), ((0, 2), 1)]).unwrap();
        let x = BivariatePolynomial::monomial(&field, 1, 1, 0).unwrap();
        let shifted =
            BivariatePolynomial::new(&field, [((0, 0), 1), ((1, 1), 1)]).unwrap();
        let substituted = q.substitute(&x, &shifted).unwrap();
        let expected = BivariatePolynomial::new(
            &field,
            [((0, 0), 1), ((1, 0), 1), ((2, 1), 1), ((2, 2), 1)],
        )
        .unwrap();
        assert_eq!(substituted, expected);
    }

    #[test]
    fn test_divide_by_max_possible_x_degree() {
        let field = gf7();
        let poly = BivariatePolynomial::new(&field, [((2, 1), 1), ((3, 0), 1)]).unwrap();
        let stripped = poly.divide_by_max_possible_x_degree();
        let expected = BivariatePolynomial::new(&field, [((0, 1), 1), ((1, 0), 1)]).unwrap();
        assert_eq!(stripped, expected);

        let untouched = BivariatePolynomial::new(&field, [((0, 1), 1), ((2, 0), 1)]).unwrap();
        assert_eq!(untouched.divide_by_max_possible_x_degree(), untouched);
        assert!(BivariatePolynomial::zero(&field)
            .divide_by_max_possible_x_degree()
            .is_zero());
    }

    #[test]
    fn test_hasse_derivative_matches_evaluation_at_order_zero() {
        let field = gf7();
        let mut calc = CombinationsCalculator::new(&field);
        let q = BivariatePolynomial::new(&field, [((2, 1), 1), ((1, 0), 4), ((0, 0), 3)]).unwrap();
        for x0 in 0..7 {
            for y0 in 0..7 {
                assert_eq!(
                    q.hasse_derivative(0, 0, x0, y0, &mut calc).unwrap(),
                    q.evaluate(x0, y0).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_hasse_derivative_known_values() {
        let field = gf7();
        let mut calc = CombinationsCalculator::new(&field);
        // Q = x^2 y: the (1, 1) Hasse derivative is C(2,1) C(1,1) x = 2x.
        let q = BivariatePolynomial::monomial(&field, 1, 2, 1).unwrap();
        assert_eq!(q.hasse_derivative(1, 1, 3, 5, &mut calc).unwrap(), 6);
        // Orders above the degree vanish.
        assert_eq!(q.hasse_derivative(3, 0, 3, 5, &mut calc).unwrap(), 0);
    }

    #[test]
    fn test_hasse_derivative_in_characteristic_two() {
        let field = gf8();
        let mut calc = CombinationsCalculator::new(&field);
        // For Q = x^2 the first Hasse derivative is C(2,1) x = 2x = 0, while
        // the second is C(2,2) = 1.
        let q = BivariatePolynomial::monomial(&field, 1, 2, 0).unwrap();
        for x0 in 0..8 {
            assert_eq!(q.hasse_derivative(1, 0, x0, 0, &mut calc).unwrap(), 0);
            assert_eq!(q.hasse_derivative(2, 0, x0, 0, &mut calc).unwrap(), 1);
        }
    }

    #[test]
    fn test_field_mismatch() {
        let a = BivariatePolynomial::monomial(&gf7(), 1, 1, 0).unwrap();
        let b = BivariatePolynomial::monomial(&gf8(), 1, 1, 0).unwrap();
        assert!(matches!(
            a.add(&b),
            Err(PolynomialError::Field(FieldError::FieldMismatch { .. }))
        ));
        let mut calc = CombinationsCalculator::new(&gf8());
        assert!(matches!(
            a.hasse_derivative(0, 0, 1, 1, &mut calc),
            Err(PolynomialError::Field(FieldError::FieldMismatch { .. }))
        ));
    }

    #[test]
    fn test_display() {
        let field = gf7();
        assert_eq!(BivariatePolynomial::zero(&field).to_string(), "0");
        let poly =
            BivariatePolynomial::new(&field, [((2, 1), 1), ((1, 0), 2), ((0, 0), 3)]).unwrap();
        assert_eq!(poly.to_string(), "x^2y + 2x + 3");
    }

    #[cfg(feature = "serde")]
    mod serialization_tests {
        use super::*;

        #[test]
        fn test_bivariate_bincode_round_trip() {
            let field = gf8();
            let poly =
                BivariatePolynomial::new(&field, [((1, 1), 3), ((0, 2), 5)]).unwrap();
            let bytes = bincode::serialize(&poly).expect("Failed to serialize");
            let decoded: BivariatePolynomial =
                bincode::deserialize(&bytes).expect("Failed to deserialize");
            assert_eq!(poly, decoded);
            assert_eq!(decoded.evaluate(2, 3).unwrap(), poly.evaluate(2, 3).unwrap());
        }
    }
}
