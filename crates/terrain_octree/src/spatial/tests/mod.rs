//! Whole-index scenarios: structure invariants and query behavior on built trees

mod cube_scenarios;
