/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(non_snake_case)]

use zeroize::Zeroize;

use crate::curve::*;

///A vector of linear polynomials: `VecPoly1(a, b)` is `a + b * x`, entrywise.
pub(crate) struct VecPoly1(pub Vec<Scalar>, pub Vec<Scalar>);

///A degree 2 polynomial: `Poly2(a, b, c)` is `a + b * x + c * x^2`.
pub(crate) struct Poly2(pub Scalar, pub Scalar, pub Scalar);

///Iterator over the powers of a scalar: `1, x, x^2, ...`
pub(crate) struct ScalarExp {
    x: Scalar,
    next_exp_x: Scalar

} impl Iterator for ScalarExp {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        let exp_x = self.next_exp_x;
        self.next_exp_x *= self.x;
        return Some(exp_x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (usize::MAX, None)
    }
}

///Return an iterator of the powers of `x`.
pub(crate) fn exp_iter(x: Scalar) -> ScalarExp {
    return ScalarExp {
        x,
        next_exp_x: Scalar::one()
    }
}

///`a + b` entrywise. Callers guarantee equal lengths.
pub(crate) fn add_vec(a: &[Scalar], b: &[Scalar]) -> Vec<Scalar> {
    return a.iter().zip(b.iter())
        .map(|(a_i, b_i)| a_i + b_i).collect()
}

///`<a, b>`. Callers guarantee equal lengths.
pub(crate) fn inner_product(a: &[Scalar], b: &[Scalar]) -> Scalar {
    return a.iter().zip(b.iter())
        .map(|(a_i, b_i)| a_i * b_i).sum()
}

///`x^n`, variable time in `n`
pub(crate) fn scalar_exp_vartime(x: &Scalar, mut n: u64) -> Scalar {
    let mut result = Scalar::one();
    let mut aux = *x;
    while n > 0 {
        if n & 1 == 1 {
            result *= aux;
        }
        n >>= 1;
        aux = aux * aux;
    }
    return result
}

///`1 + x + x^2 + ... + x^(n-1)`
pub(crate) fn sum_of_powers(x: &Scalar, n: usize) -> Scalar {
    if !n.is_power_of_two() {
        return exp_iter(*x).take(n).sum()
    }
    if n == 0 || n == 1 {
        return Scalar::from(n as u64)
    }
    //(1 + x)(1 + x^2)(1 + x^4)... for powers of two
    let mut m = n;
    let mut result = Scalar::one() + x;
    let mut factor = *x;
    while m > 2 {
        factor = factor * factor;
        result = result + factor * result;
        m /= 2;
    }
    return result
}

impl VecPoly1 {
    pub(crate) fn zero(n: usize) -> Self {
        return VecPoly1(vec![Scalar::zero(); n], vec![Scalar::zero(); n])
    }

    ///Multiply two vector polynomials, giving the scalar polynomial of their inner product.
    pub(crate) fn inner_product(&self, rhs: &VecPoly1) -> Poly2 {
        //Karatsuba: t1 = <l0 + l1, r0 + r1> - t0 - t2
        let l = self;
        let r = rhs;

        let t0 = inner_product(&l.0, &r.0);
        let t2 = inner_product(&l.1, &r.1);

        let l0_plus_l1 = add_vec(&l.0, &l.1);
        let r0_plus_r1 = add_vec(&r.0, &r.1);

        let t1 = inner_product(&l0_plus_l1, &r0_plus_r1) - t0 - t2;

        return Poly2(t0, t1, t2)
    }

    pub(crate) fn eval(&self, x: Scalar) -> Vec<Scalar> {
        return self.0.iter().zip(self.1.iter())
            .map(|(a, b)| a + b * x).collect()
    }

} impl Drop for VecPoly1 {
    fn drop(&mut self) {
        self.0.zeroize();
        self.1.zeroize();
    }
}

impl Poly2 {
    pub(crate) fn eval(&self, x: Scalar) -> Scalar {
        return self.0 + x * (self.1 + x * self.2)
    }

} impl Drop for Poly2 {
    fn drop(&mut self) {
        self.0.zeroize();
        self.1.zeroize();
        self.2.zeroize();
    }
}
