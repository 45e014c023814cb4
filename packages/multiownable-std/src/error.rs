use soroban_sdk::contracterror;

/// Reasons a governance step can be rejected.
///
/// None of these ever reach a caller as a host error: the public surface turns them into
/// `false` (or an empty value) and logs the code.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultiownableError {
    NotAnOwner = 1,
    WitnessCheckFailed = 2,
    VotingExpired = 3,
    NothingToCancel = 4,
    NotVoted = 5,
    EmptyOwnerSet = 6,
    UnknownOperation = 7,
    InvalidArguments = 8,
}

/// Return early with `Err($e)` unless `$cond` holds.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr $(,)?) => {
        if !$cond {
            return Err($e);
        }
    };
}

/// Unwrap an [`Option`] in tests, naming the expression on [`None`].
#[macro_export]
macro_rules! assert_some {
    ( $x:expr ) => {
        match $x {
            core::option::Option::Some(s) => s,
            core::option::Option::None => {
                panic!("Expected value when calling {}, got None", stringify!($x));
            }
        }
    };
}

/// Assert that a [`Result`] failed with exactly the given error.
#[macro_export]
macro_rules! assert_err {
    ( $x:expr, $e:expr ) => {
        match $x {
            std::result::Result::Err(e) => {
                if $e != e {
                    panic!("Expected error {}, got {:?} instead", stringify!($e), e)
                }
            }
            std::result::Result::Ok(v) => {
                panic!(
                    "Expected error when calling {}, got {:?} instead",
                    stringify!($x),
                    v
                );
            }
        }
    };
}
