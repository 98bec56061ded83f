/// Assert a list of `expression => expected` pairs.
macro_rules! test {
    ($($actual:expr => $expected:expr),* $(,)?) => {
        $(assert_eq!($actual, $expected);)*
    };
}

mod ack;
mod data;
mod malformed;
