//! Helper macro for declaring port error enums.
//!
//! Each variant carries named fields and gets a snake_case constructor that
//! accepts anything convertible into those fields, so adapters can write
//! `LoanApplicationRepositoryError::connection("pool exhausted")`.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $($field : $ty,)*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreAccessError {
            Unreachable { message: String } => "store unreachable: {message}",
            Rejected { message: String, rows: u64 } => "store rejected {rows} rows: {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = StoreAccessError::unreachable("socket closed");
        assert_eq!(err.to_string(), "store unreachable: socket closed");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = StoreAccessError::rejected("constraint", 2_u64);
        assert_eq!(err.to_string(), "store rejected 2 rows: constraint");
    }
}
