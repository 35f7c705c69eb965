#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        match $e {
            None => {}
            Some(v) => panic!("expected `None`; actual=Some({:?})", v),
        }
    };
}

#[macro_export]
macro_rules! assert_some {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Some(v) => v,
            None => {
                use std::fmt::Write;
                let mut msg = format!("expected `Some`; actual=None ({})", stringify!($e));

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}
