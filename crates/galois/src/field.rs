// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Galois field construction and representation-level arithmetic.
//!
//! A field of order `q = p^e` maps every element to an integer representation
//! in `[0, q)`: the base-`p` digits of the representation are the coefficients
//! of the element's polynomial form. Prime-order fields compute directly with
//! residues; prime-power fields precompute full addition/subtraction tables at
//! construction. Both kinds probe for a multiplicative generator and store
//! discrete-log/antilog tables, so multiplication, division, powers and
//! logarithms are O(1) lookups afterwards.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::element::FieldElement;
use crate::errors::{FieldError, FieldResult};

/// Largest supported order for prime-power fields.
///
/// The addition and subtraction tables are dense `order x order` matrices,
/// so the extension kind is kept within a size where both fit comfortably
/// in memory. Prime-order fields have no such tables and no such limit.
const MAX_EXTENSION_ORDER: usize = 4096;

/// A finite field of prime or prime-power order.
///
/// The handle is a cheap clone (`Arc` internally); all tables are built once
/// at construction and never mutated, so a field can be shared freely across
/// threads. Two fields are equal when their order and defining polynomial are
/// equal, regardless of which handle they came from.
#[derive(Clone)]
pub struct GaloisField {
    inner: Arc<FieldInner>,
}

struct FieldInner {
    order: usize,
    characteristic: usize,
    degree: usize,
    /// Ascending coefficients of the defining polynomial; empty for prime fields.
    irreducible: Vec<usize>,
    generator: usize,
    /// `log[a]` is the discrete log of `a` to the generator base; `log[0]` is
    /// never read (all callers exclude zero first).
    log: Vec<usize>,
    antilog: Vec<usize>,
    kind: FieldKind,
}

enum FieldKind {
    Prime,
    Extension {
        add: Vec<Vec<usize>>,
        sub: Vec<Vec<usize>>,
    },
}

impl GaloisField {
    /// Constructs the field of the given order.
    ///
    /// A prime order yields a residue field. A prime-power order is built
    /// from the default irreducible polynomial for that order; use
    /// [`GaloisField::with_polynomial`] to pick a different one.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidField` if the order is not a prime power,
    /// or no default polynomial is known for it.
    pub fn new(order: usize) -> FieldResult<Self> {
        let (characteristic, degree) = prime_power_decomposition(order).ok_or_else(|| {
            FieldError::invalid_field(format!("order {order} is not a power of a prime"))
        })?;
        if degree == 1 {
            return Self::build_prime(order);
        }
        let irreducible = default_irreducible(order).ok_or_else(|| {
            FieldError::invalid_field(format!(
                "no default irreducible polynomial for order {order}; provide one with `with_polynomial`"
            ))
        })?;
        Self::build_extension(order, characteristic, degree, irreducible.to_vec())
    }

    /// Constructs a prime-power field from an explicit irreducible polynomial.
    ///
    /// `irreducible` holds ascending coefficients over the prime subfield;
    /// its degree must equal the extension degree of `order`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidField` if the order is not a prime power,
    /// is of prime order (which takes no polynomial), or the polynomial is
    /// malformed or reducible. Reducibility is caught by the root scan over
    /// the prime subfield for degrees up to three, and by the failing
    /// generator probe beyond that.
    pub fn with_polynomial(order: usize, irreducible: &[usize]) -> FieldResult<Self> {
        let (characteristic, degree) = prime_power_decomposition(order).ok_or_else(|| {
            FieldError::invalid_field(format!("order {order} is not a power of a prime"))
        })?;
        if degree == 1 {
            return Err(FieldError::invalid_field(format!(
                "GF({order}) has prime order and takes no irreducible polynomial"
            )));
        }
        Self::build_extension(order, characteristic, degree, irreducible.to_vec())
    }

    fn build_prime(order: usize) -> FieldResult<Self> {
        let generator = if order == 2 {
            1
        } else {
            find_generator(order, |a, b| mul_mod(a, b, order)).ok_or_else(|| {
                FieldError::invalid_field(format!("no multiplicative generator for GF({order})"))
            })?
        };
        let (log, antilog) = build_log_tables(order, generator, |a, b| mul_mod(a, b, order));
        Ok(Self::wrap(FieldInner {
            order,
            characteristic: order,
            degree: 1,
            irreducible: Vec::new(),
            generator,
            log,
            antilog,
            kind: FieldKind::Prime,
        }))
    }

    fn build_extension(
        order: usize,
        characteristic: usize,
        degree: usize,
        irreducible: Vec<usize>,
    ) -> FieldResult<Self> {
        if order > MAX_EXTENSION_ORDER {
            return Err(FieldError::invalid_field(format!(
                "order {order} exceeds the table-backed limit of {MAX_EXTENSION_ORDER} for prime-power fields"
            )));
        }
        if irreducible.len() != degree + 1 {
            return Err(FieldError::invalid_field(format!(
                "polynomial of degree {} cannot define an extension of degree {degree}",
                irreducible.len().saturating_sub(1)
            )));
        }
        for &coefficient in &irreducible {
            if coefficient >= characteristic {
                return Err(FieldError::invalid_field(format!(
                    "coefficient {coefficient} is not an element of GF({characteristic})"
                )));
            }
        }
        if irreducible[degree] == 0 {
            return Err(FieldError::invalid_field(
                "the defining polynomial has a zero leading coefficient",
            ));
        }
        for x in 0..characteristic {
            let mut value = 0;
            for &coefficient in irreducible.iter().rev() {
                value = (value * x + coefficient) % characteristic;
            }
            if value == 0 {
                return Err(FieldError::invalid_field(format!(
                    "the defining polynomial has root {x} in GF({characteristic}) and is not irreducible"
                )));
            }
        }

        let lead_inverse = mod_inverse(irreducible[degree], characteristic)?;
        let digits: Vec<Vec<usize>> = (0..order)
            .map(|value| to_digits(value, characteristic, degree))
            .collect();
        let multiply = |a: usize, b: usize| -> usize {
            let product = multiply_digits(
                &digits[a],
                &digits[b],
                &irreducible,
                lead_inverse,
                characteristic,
            );
            from_digits(&product, characteristic)
        };

        let generator = find_generator(order, &multiply).ok_or_else(|| {
            FieldError::invalid_field(format!(
                "no element generates the multiplicative group of order {}; the defining polynomial is not irreducible",
                order - 1
            ))
        })?;
        let (log, antilog) = build_log_tables(order, generator, &multiply);
        let (add, sub) = build_addition_tables(order, characteristic, &digits);

        Ok(Self::wrap(FieldInner {
            order,
            characteristic,
            degree,
            irreducible,
            generator,
            log,
            antilog,
            kind: FieldKind::Extension { add, sub },
        }))
    }

    fn wrap(inner: FieldInner) -> Self {
        GaloisField {
            inner: Arc::new(inner),
        }
    }

    /// Number of elements in the field.
    pub fn order(&self) -> usize {
        self.inner.order
    }

    /// The prime `p` with `order = p^e`.
    pub fn characteristic(&self) -> usize {
        self.inner.characteristic
    }

    /// The exponent `e` with `order = p^e`; 1 for prime fields.
    pub fn extension_degree(&self) -> usize {
        self.inner.degree
    }

    /// Ascending coefficients of the defining polynomial, or `None` for a
    /// prime field.
    pub fn irreducible_polynomial(&self) -> Option<&[usize]> {
        if self.inner.irreducible.is_empty() {
            None
        } else {
            Some(&self.inner.irreducible)
        }
    }

    /// Representation of the probed multiplicative generator.
    pub fn generator(&self) -> usize {
        self.inner.generator
    }

    /// Whether `value` is the representation of a field element.
    pub fn is_element(&self, value: usize) -> bool {
        value < self.inner.order
    }

    /// Validates a representation.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` when `value` is out of range.
    pub fn ensure_element(&self, value: usize) -> FieldResult<()> {
        if self.is_element(value) {
            Ok(())
        } else {
            Err(FieldError::NotFieldElement {
                value,
                order: self.inner.order,
            })
        }
    }

    /// Adds two representations.
    pub fn add(&self, a: usize, b: usize) -> usize {
        debug_assert!(self.is_element(a) && self.is_element(b));
        match &self.inner.kind {
            FieldKind::Prime => (a + b) % self.inner.order,
            FieldKind::Extension { add, .. } => add[a][b],
        }
    }

    /// Subtracts `b` from `a`.
    pub fn sub(&self, a: usize, b: usize) -> usize {
        debug_assert!(self.is_element(a) && self.is_element(b));
        match &self.inner.kind {
            FieldKind::Prime => (a + self.inner.order - b) % self.inner.order,
            FieldKind::Extension { sub, .. } => sub[a][b],
        }
    }

    /// Additive inverse of `a`.
    pub fn negate(&self, a: usize) -> usize {
        self.sub(0, a)
    }

    /// Multiplies two representations.
    pub fn mul(&self, a: usize, b: usize) -> usize {
        debug_assert!(self.is_element(a) && self.is_element(b));
        if a == 0 || b == 0 {
            return 0;
        }
        match &self.inner.kind {
            FieldKind::Prime => mul_mod(a, b, self.inner.order),
            FieldKind::Extension { .. } => {
                let group = self.inner.order - 1;
                self.inner.antilog[(self.inner.log[a] + self.inner.log[b]) % group]
            }
        }
    }

    /// Divides `a` by `b`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::DivisionByZero` when `b` is zero.
    pub fn div(&self, a: usize, b: usize) -> FieldResult<usize> {
        debug_assert!(self.is_element(a) && self.is_element(b));
        if b == 0 {
            return Err(FieldError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }
        let group = self.inner.order - 1;
        Ok(self.inner.antilog[(self.inner.log[a] + group - self.inner.log[b]) % group])
    }

    /// Multiplicative inverse of `a`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::DivisionByZero` when `a` is zero.
    pub fn inverse(&self, a: usize) -> FieldResult<usize> {
        self.div(1, a)
    }

    /// Raises `a` to the `exponent`-th power, with `pow(a, 0) == 1` for
    /// every `a`, including zero.
    pub fn pow(&self, a: usize, exponent: usize) -> usize {
        debug_assert!(self.is_element(a));
        if exponent == 0 {
            return 1;
        }
        if a == 0 {
            return 0;
        }
        let group = self.inner.order - 1;
        self.inner.antilog[mul_mod(self.inner.log[a], exponent % group, group)]
    }

    /// The `index`-th power of the generator; `index` is reduced modulo
    /// the multiplicative group order.
    pub fn power_of_generator(&self, index: usize) -> usize {
        self.inner.antilog[index % (self.inner.order - 1)]
    }

    /// Discrete logarithm of `a` to the generator base.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::DivisionByZero` when `a` is zero, which has no
    /// logarithm in the multiplicative group.
    pub fn discrete_log(&self, a: usize) -> FieldResult<usize> {
        debug_assert!(self.is_element(a));
        if a == 0 {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.inner.log[a])
    }

    /// Wraps a representation as a [`FieldElement`].
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotFieldElement` when `value` is out of range.
    pub fn element(&self, value: usize) -> FieldResult<FieldElement> {
        self.ensure_element(value)?;
        Ok(FieldElement::from_parts(self.clone(), value))
    }

    /// The additive identity.
    pub fn zero(&self) -> FieldElement {
        FieldElement::from_parts(self.clone(), 0)
    }

    /// The multiplicative identity.
    pub fn one(&self) -> FieldElement {
        FieldElement::from_parts(self.clone(), 1)
    }

    /// Iterates over every element of the field in representation order.
    pub fn elements(&self) -> impl Iterator<Item = FieldElement> + '_ {
        (0..self.inner.order).map(move |value| FieldElement::from_parts(self.clone(), value))
    }
}

impl PartialEq for GaloisField {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.order == other.inner.order
                && self.inner.irreducible == other.inner.irreducible)
    }
}

impl Eq for GaloisField {}

impl Hash for GaloisField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.order.hash(state);
        self.inner.irreducible.hash(state);
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("order", &self.inner.order)
            .field("characteristic", &self.inner.characteristic)
            .field("irreducible", &self.inner.irreducible)
            .finish()
    }
}

impl fmt::Display for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.irreducible.is_empty() {
            write!(f, "GF({})", self.inner.order)
        } else {
            write!(
                f,
                "GF({}, {})",
                self.inner.order,
                render_polynomial(&self.inner.irreducible)
            )
        }
    }
}

/// Renders ascending prime-subfield coefficients as `c0 + c1*x + ...`.
fn render_polynomial(coefficients: &[usize]) -> String {
    let mut rendered = String::new();
    for (degree, &coefficient) in coefficients.iter().enumerate() {
        if coefficient == 0 {
            continue;
        }
        if !rendered.is_empty() {
            rendered.push_str(" + ");
        }
        match (degree, coefficient) {
            (0, c) => rendered.push_str(&c.to_string()),
            (1, 1) => rendered.push('x'),
            (1, c) => rendered.push_str(&format!("{c}x")),
            (d, 1) => rendered.push_str(&format!("x^{d}")),
            (d, c) => rendered.push_str(&format!("{c}x^{d}")),
        }
    }
    if rendered.is_empty() {
        rendered.push('0');
    }
    rendered
}

/// Default irreducible polynomials (ascending coefficients) for the
/// prime-power orders this toolkit is normally used with.
fn default_irreducible(order: usize) -> Option<&'static [usize]> {
    let coefficients: &[usize] = match order {
        4 => &[1, 1, 1],
        8 => &[1, 1, 0, 1],
        9 => &[1, 0, 1],
        16 => &[1, 1, 0, 0, 1],
        25 => &[2, 0, 1],
        27 => &[2, 2, 0, 1],
        32 => &[1, 0, 1, 0, 0, 1],
        49 => &[1, 0, 1],
        64 => &[1, 1, 0, 0, 0, 0, 1],
        81 => &[2, 0, 0, 2, 1],
        121 => &[1, 0, 1],
        125 => &[1, 1, 0, 1],
        128 => &[1, 0, 0, 1, 0, 0, 0, 1],
        169 => &[2, 0, 1],
        243 => &[1, 2, 0, 0, 0, 1],
        256 => &[1, 0, 1, 1, 1, 0, 0, 0, 1],
        343 => &[2, 0, 0, 1],
        512 => &[1, 0, 0, 0, 1, 0, 0, 0, 0, 1],
        1024 => &[1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1],
        _ => return None,
    };
    Some(coefficients)
}

fn smallest_prime_factor(n: usize) -> usize {
    if n % 2 == 0 {
        return 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return d;
        }
        d += 2;
    }
    n
}

/// Splits `order` into `(p, e)` with `order = p^e`, or `None` when `order`
/// is not a prime power.
fn prime_power_decomposition(order: usize) -> Option<(usize, usize)> {
    if order < 2 {
        return None;
    }
    let p = smallest_prime_factor(order);
    let mut n = order;
    let mut degree = 0;
    while n % p == 0 {
        n /= p;
        degree += 1;
    }
    (n == 1).then_some((p, degree))
}

/// Product of two representations modulo `modulus`, widened through
/// `u128` so operands near the word limit reduce without wrapping.
fn mul_mod(a: usize, b: usize, modulus: usize) -> usize {
    (a as u128 * b as u128 % modulus as u128) as usize
}

/// Extended-Euclid modular inverse over the prime subfield.
fn mod_inverse(a: usize, modulus: usize) -> FieldResult<usize> {
    let (mut old_r, mut r) = (a as i64, modulus as i64);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }
    if old_r != 1 {
        return Err(FieldError::invalid_field(format!(
            "{a} has no inverse modulo {modulus}"
        )));
    }
    Ok(old_s.rem_euclid(modulus as i64) as usize)
}

/// Base-`p` digits of `value`, ascending, padded to `degree` entries.
fn to_digits(mut value: usize, p: usize, degree: usize) -> Vec<usize> {
    let mut digits = vec![0; degree];
    for digit in digits.iter_mut() {
        *digit = value % p;
        value /= p;
    }
    digits
}

fn from_digits(digits: &[usize], p: usize) -> usize {
    digits.iter().rev().fold(0, |acc, &digit| acc * p + digit)
}

/// Multiplies two digit polynomials and reduces modulo the defining
/// polynomial, returning exactly `degree` digits.
fn multiply_digits(
    a: &[usize],
    b: &[usize],
    modulus: &[usize],
    lead_inverse: usize,
    p: usize,
) -> Vec<usize> {
    let degree = modulus.len() - 1;
    let mut product = vec![0usize; 2 * degree - 1];
    for (i, &da) in a.iter().enumerate() {
        if da == 0 {
            continue;
        }
        for (j, &db) in b.iter().enumerate() {
            product[i + j] = (product[i + j] + da * db) % p;
        }
    }
    for d in (degree..product.len()).rev() {
        if product[d] == 0 {
            continue;
        }
        let factor = product[d] * lead_inverse % p;
        for (i, &mc) in modulus.iter().enumerate() {
            let index = d - degree + i;
            product[index] = (product[index] + p - factor * mc % p) % p;
        }
    }
    product.truncate(degree);
    product
}

/// Probes representations from 2 upwards for one whose multiplicative
/// cycle has length `order - 1`. The cycle walk also detects zero
/// divisors (the walk hits 0 or fails to close), so a reducible defining
/// polynomial makes the probe return `None`.
fn find_generator<F>(order: usize, multiply: F) -> Option<usize>
where
    F: Fn(usize, usize) -> usize,
{
    for candidate in 2..order {
        let mut value = candidate;
        let mut length = 1usize;
        let closed = loop {
            if value == 1 {
                break true;
            }
            if value == 0 || length > order {
                break false;
            }
            value = multiply(value, candidate);
            length += 1;
        };
        if closed && length == order - 1 {
            return Some(candidate);
        }
    }
    None
}

fn build_log_tables<F>(order: usize, generator: usize, multiply: F) -> (Vec<usize>, Vec<usize>)
where
    F: Fn(usize, usize) -> usize,
{
    let mut log = vec![0usize; order];
    let mut antilog = vec![0usize; order - 1];
    let mut value = 1usize;
    for index in 0..order - 1 {
        antilog[index] = value;
        log[value] = index;
        value = multiply(value, generator);
    }
    (log, antilog)
}

fn build_addition_tables(
    order: usize,
    p: usize,
    digits: &[Vec<usize>],
) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
    let mut add = vec![vec![0usize; order]; order];
    let mut sub = vec![vec![0usize; order]; order];
    for a in 0..order {
        for b in 0..order {
            let mut sum = 0;
            let mut difference = 0;
            for i in (0..digits[a].len()).rev() {
                sum = sum * p + (digits[a][i] + digits[b][i]) % p;
                difference = difference * p + (digits[a][i] + p - digits[b][i]) % p;
            }
            add[a][b] = sum;
            sub[a][b] = difference;
        }
    }
    (add, sub)
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::GaloisField;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialized form of a field: order plus defining polynomial. The
    /// tables are rebuilt on deserialization.
    #[derive(Serialize, Deserialize)]
    struct FieldDescriptor {
        order: usize,
        irreducible: Vec<usize>,
    }

    impl Serialize for GaloisField {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            FieldDescriptor {
                order: self.inner.order,
                irreducible: self.inner.irreducible.clone(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for GaloisField {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let descriptor = FieldDescriptor::deserialize(deserializer)?;
            let field = if descriptor.irreducible.is_empty() {
                GaloisField::new(descriptor.order)
            } else {
                GaloisField::with_polynomial(descriptor.order, &descriptor.irreducible)
            };
            field.map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_field_axioms(field: &GaloisField) {
        let order = field.order();
        for a in 0..order {
            assert_eq!(field.add(a, 0), a);
            assert_eq!(field.mul(a, 1), a);
            assert_eq!(field.add(a, field.negate(a)), 0);
            if a != 0 {
                let inverse = field.inverse(a).unwrap();
                assert_eq!(field.mul(a, inverse), 1);
            }
            for b in 0..order {
                assert_eq!(field.add(a, b), field.add(b, a));
                assert_eq!(field.mul(a, b), field.mul(b, a));
                assert_eq!(field.sub(field.add(a, b), b), a);
                for c in 0..order {
                    assert_eq!(
                        field.add(field.add(a, b), c),
                        field.add(a, field.add(b, c))
                    );
                    assert_eq!(
                        field.mul(field.mul(a, b), c),
                        field.mul(a, field.mul(b, c))
                    );
                    assert_eq!(
                        field.mul(a, field.add(b, c)),
                        field.add(field.mul(a, b), field.mul(a, c))
                    );
                }
            }
        }
    }

    fn assert_log_tables(field: &GaloisField) {
        for a in 1..field.order() {
            let log = field.discrete_log(a).unwrap();
            assert_eq!(field.power_of_generator(log), a);
            assert_eq!(field.pow(field.generator(), log), a);
        }
        assert_eq!(field.pow(field.generator(), field.order() - 1), 1);
    }

    #[test]
    fn test_gf2() {
        let field = GaloisField::new(2).unwrap();
        assert_eq!(field.order(), 2);
        assert_eq!(field.characteristic(), 2);
        assert_eq!(field.extension_degree(), 1);
        assert_eq!(field.irreducible_polynomial(), None);
        assert_field_axioms(&field);
        assert_log_tables(&field);
    }

    #[test]
    fn test_prime_field_axioms() {
        for p in [3, 5, 7, 11, 13, 17] {
            let field = GaloisField::new(p).unwrap();
            assert_field_axioms(&field);
            assert_log_tables(&field);
        }
    }

    #[test]
    fn test_gf5_arithmetic() {
        let field = GaloisField::new(5).unwrap();
        assert_eq!(field.add(3, 4), 2);
        assert_eq!(field.sub(1, 3), 3);
        assert_eq!(field.mul(3, 4), 2);
        assert_eq!(field.div(2, 3).unwrap(), 4);
        assert_eq!(field.negate(2), 3);
        assert_eq!(field.pow(2, 4), 1);
    }

    #[test]
    fn test_gf8_with_explicit_polynomial() {
        let field = GaloisField::with_polynomial(8, &[1, 1, 0, 1]).unwrap();
        assert_eq!(field.characteristic(), 2);
        assert_eq!(field.extension_degree(), 3);
        assert_eq!(field.irreducible_polynomial(), Some(&[1, 1, 0, 1][..]));
        assert_field_axioms(&field);
        assert_log_tables(&field);
        // In characteristic two, addition is digit-wise xor of representations.
        assert_eq!(field.add(5, 6), 3);
        assert_eq!(field.sub(5, 6), 3);
        // x * x^2 = x^3 = x + 1 under x^3 + x + 1.
        assert_eq!(field.mul(2, 4), 3);
        assert_eq!(field.mul(5, 6), 3);
    }

    #[test]
    fn test_gf27_with_explicit_polynomial() {
        let field = GaloisField::with_polynomial(27, &[2, 2, 0, 1]).unwrap();
        assert_eq!(field.characteristic(), 3);
        assert_eq!(field.extension_degree(), 3);
        assert_field_axioms(&field);
        assert_log_tables(&field);
        // 5 = [2,1,0] and 7 = [1,2,0] in base-3 digits; their digit sums
        // vanish mod 3.
        assert_eq!(field.add(5, 7), 0);
        assert_eq!(field.negate(5), 7);
    }

    #[test]
    fn test_gf9_default_polynomial() {
        let field = GaloisField::new(9).unwrap();
        assert_eq!(field.irreducible_polynomial(), Some(&[1, 0, 1][..]));
        assert_field_axioms(&field);
        assert_log_tables(&field);
    }

    #[test]
    fn test_default_polynomials_construct() {
        for order in [4, 8, 9, 16, 25, 27, 32, 49, 64, 81, 121, 125, 128, 169, 243, 256] {
            let field = GaloisField::new(order).unwrap();
            assert_eq!(field.order(), order);
            assert_log_tables(&field);
        }
    }

    #[test]
    fn test_larger_default_orders_construct() {
        for order in [343, 512] {
            let field = GaloisField::new(order).unwrap();
            assert_log_tables(&field);
        }
    }

    #[test]
    fn test_invalid_orders_rejected() {
        for order in [0, 1, 6, 12, 15, 100] {
            assert!(matches!(
                GaloisField::new(order),
                Err(FieldError::InvalidField { .. })
            ));
        }
    }

    #[test]
    fn test_order_without_default_polynomial_rejected() {
        assert!(matches!(
            GaloisField::new(2048),
            Err(FieldError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_prime_order_takes_no_polynomial() {
        assert!(matches!(
            GaloisField::with_polynomial(7, &[1, 1]),
            Err(FieldError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_polynomial_with_root_rejected() {
        // x^2 + 1 has root 1 over GF(2).
        assert!(matches!(
            GaloisField::with_polynomial(4, &[1, 0, 1]),
            Err(FieldError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_rootless_reducible_polynomial_rejected() {
        // x^4 + x^2 + 1 = (x^2 + x + 1)^2 has no roots over GF(2); the
        // generator probe is what rejects it.
        assert!(matches!(
            GaloisField::with_polynomial(16, &[1, 0, 1, 0, 1]),
            Err(FieldError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_wrong_polynomial_degree_rejected() {
        assert!(matches!(
            GaloisField::with_polynomial(8, &[1, 1, 1]),
            Err(FieldError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_ensure_element() {
        let field = GaloisField::new(8).unwrap();
        assert!(field.ensure_element(7).is_ok());
        assert_eq!(
            field.ensure_element(8),
            Err(FieldError::NotFieldElement { value: 8, order: 8 })
        );
    }

    #[test]
    fn test_division_by_zero() {
        let field = GaloisField::new(9).unwrap();
        assert_eq!(field.div(4, 0), Err(FieldError::DivisionByZero));
        assert_eq!(field.inverse(0), Err(FieldError::DivisionByZero));
        assert_eq!(field.discrete_log(0), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn test_pow_edge_cases() {
        let field = GaloisField::new(9).unwrap();
        assert_eq!(field.pow(0, 0), 1);
        assert_eq!(field.pow(0, 5), 0);
        assert_eq!(field.pow(1, 123), 1);
        for a in 1..field.order() {
            assert_eq!(field.pow(a, field.order() - 1), 1);
            assert_eq!(field.pow(a, field.order()), a);
        }
    }

    #[test]
    fn test_mul_mod_near_the_word_limit() {
        // 2^61 - 1 is prime, and m - 1 is its own inverse: (m - 1)^2 =
        // m^2 - 2m + 1 = 1 (mod m). The raw product occupies 122 bits.
        let m = (1usize << 61) - 1;
        assert_eq!(mul_mod(m - 1, m - 1, m), 1);

        // 2^40 * (2^40 + 1) = 2^80 + 2^40, and 2^80 = 2^19 (mod 2^61 - 1).
        assert_eq!(mul_mod(1 << 40, (1 << 40) + 1, m), (1 << 40) + (1 << 19));

        // Small operands agree with plain arithmetic.
        assert_eq!(mul_mod(3, 4, 7), 5);
    }

    #[test]
    fn test_field_equality() {
        let default = GaloisField::new(8).unwrap();
        let explicit = GaloisField::with_polynomial(8, &[1, 1, 0, 1]).unwrap();
        assert_eq!(default, explicit);

        let other_nine = GaloisField::with_polynomial(9, &[2, 1, 1]).unwrap();
        assert_ne!(GaloisField::new(9).unwrap(), other_nine);
        assert_ne!(default, GaloisField::new(9).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(GaloisField::new(7).unwrap().to_string(), "GF(7)");
        assert_eq!(
            GaloisField::new(8).unwrap().to_string(),
            "GF(8, 1 + x + x^3)"
        );
        assert_eq!(
            GaloisField::new(27).unwrap().to_string(),
            "GF(27, 2 + 2x + x^3)"
        );
    }

    #[test]
    fn test_elements_iterator() {
        let field = GaloisField::new(4).unwrap();
        let values: Vec<usize> = field.elements().map(|e| e.value()).collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }

    #[cfg(feature = "serde")]
    mod serialization_tests {
        use super::*;

        #[test]
        fn test_field_bincode_round_trip() {
            for order in [7, 8, 27] {
                let field = GaloisField::new(order).unwrap();
                let bytes = bincode::serialize(&field).expect("Failed to serialize");
                let decoded: GaloisField =
                    bincode::deserialize(&bytes).expect("Failed to deserialize");
                assert_eq!(field, decoded);
                assert_eq!(decoded.mul(1, 1), 1);
            }
        }

        #[test]
        fn test_explicit_polynomial_survives_round_trip() {
            let field = GaloisField::with_polynomial(9, &[2, 1, 1]).unwrap();
            let bytes = bincode::serialize(&field).expect("Failed to serialize");
            let decoded: GaloisField =
                bincode::deserialize(&bytes).expect("Failed to deserialize");
            assert_eq!(decoded.irreducible_polynomial(), Some(&[2, 1, 1][..]));
        }
    }
}
