pub mod add;
pub mod check;
pub mod compare;
pub mod normalize;
pub mod sum;
