mod common;

mod intake;
mod residence;
mod routing;
