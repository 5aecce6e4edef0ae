pub mod arrangement;
pub use arrangement::*;

pub mod duel;
pub use duel::*;

pub mod lane;
pub use lane::*;

pub mod settlement;
pub use settlement::*;

pub mod showdown;
pub use showdown::*;

pub mod solver;
pub use solver::*;

pub mod special;
pub use special::*;

pub mod submission;
pub use submission::*;

pub mod water;
