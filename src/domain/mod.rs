//! Core domain: the prayer-time calculation and its entities.
//!
//! Everything under [`astro`], [`calculator`], [`schedule`], [`method`] and
//! [`hijri`] is pure computation with no I/O; [`entities`] and
//! [`repositories`] define the persistence seam.

pub mod astro;
pub mod calculator;
pub mod entities;
pub mod hijri;
pub mod method;
pub mod repositories;
pub mod schedule;
