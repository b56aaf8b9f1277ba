/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use serde::{Serialize,Deserialize};
use crate::sqrt;

/// a point/vector in a locally flat, meter scaled planar frame (e.g. one UTM zone)

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Cartesian2 {
    pub x: f64,
    pub y: f64
}

impl Cartesian2 {
    pub fn new (x: f64, y: f64) -> Cartesian2 {
        Cartesian2{x,y}
    }

    pub fn zero () -> Cartesian2 {
        Cartesian2{x: 0.0, y: 0.0}
    }

    pub fn dot (&self, p: &Cartesian2) -> f64 {
        (self.x * p.x) + (self.y * p.y)
    }

    pub fn length (&self) -> f64 {
        sqrt( self.length_squared())
    }

    pub fn length_squared (&self) -> f64 {
        (self.x * self.x) + (self.y * self.y)
    }

    pub fn distance_to (&self, p: &Cartesian2) -> f64 {
        (*self - *p).length()
    }
}

impl std::fmt::Display for Cartesian2 {
    fn fmt (&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ {}, {} ]", self.x, self.y)
    }
}

impl Add for Cartesian2 {
    type Output = Self;

     fn add (self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y
        }
    }
}

impl AddAssign for Cartesian2 {
     fn add_assign (&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Cartesian2 {
    type Output = Self;

     fn sub (self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y
        }
    }
}

impl SubAssign for Cartesian2 {
     fn sub_assign (&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Cartesian2 {
    type Output = Self;

     fn mul (self, rhs: f64) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs
        }
    }
}

impl MulAssign<f64> for Cartesian2 {
     fn mul_assign (&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/* #region implicit line ******************************************************************************************/

/// implicit line a*x + b*y + c = 0, kept normalized so that a² + b² == 1.
/// with that invariant `signed_distance_to` is the euclidean point-line distance and the
/// reflection formulas do not need re-normalization
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct ImplicitLine2 {
    a: f64,
    b: f64,
    c: f64
}

impl ImplicitLine2 {
    /// normalized coefficients of the line through p1 and p2.
    /// returns None if the points coincide (no line defined - callers must not ignore this)
    pub fn from_points (p1: &Cartesian2, p2: &Cartesian2) -> Option<ImplicitLine2> {
        let a = p2.y - p1.y;
        let b = p1.x - p2.x;
        let c = (p2.x * p1.y) - (p1.x * p2.y);

        let len = sqrt( a*a + b*b);
        if len == 0.0 { return None }

        Some( ImplicitLine2{ a: a/len, b: b/len, c: c/len })
    }

    pub fn a (&self) -> f64 { self.a }
    pub fn b (&self) -> f64 { self.b }
    pub fn c (&self) -> f64 { self.c }

    /// euclidean distance of p to this line, signed by which side of the line p is on
    pub fn signed_distance_to (&self, p: &Cartesian2) -> f64 {
        (self.a * p.x) + (self.b * p.y) + self.c
    }

    /// orthogonal projection of p onto this line
    pub fn project_point (&self, p: &Cartesian2) -> Cartesian2 {
        let d = self.signed_distance_to(p);
        Cartesian2::new( p.x - (self.a * d), p.y - (self.b * d))
    }

    /// mirror image of p across this line. This is an involution - reflecting twice
    /// reproduces p (within floating point precision)
    pub fn reflect_point (&self, p: &Cartesian2) -> Cartesian2 {
        let pp = self.project_point(p);
        Cartesian2::new( (2.0 * pp.x) - p.x, (2.0 * pp.y) - p.y)
    }
}

/* #endregion implicit line */
