//! Opaque, cheaply clonable labels for devices and places.
//!
//! Traces identify devices by MAC address and places by access-point name.
//! Neither carries any meaning beyond equality, so both are wrapped in
//! `Arc<str>` newtypes: cloning a label into every derived encounter or
//! contact is a reference-count bump, not a string copy.  `Ord` exists only so
//! that pair keys and output can be made deterministic.

use std::fmt;
use std::sync::Arc;

/// Generate a label newtype around a shared string.
macro_rules! label {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(Arc<str>);

        impl $name {
            pub fn new(label: impl AsRef<str>) -> Self {
                $name(Arc::from(label.as_ref()))
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(s: &str) -> Self {
                $name::new(s)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(s: String) -> Self {
                $name(Arc::from(s))
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

label! {
    /// A device observed in the trace (typically a MAC address).
    pub struct Node;
}

label! {
    /// A place a device can be present at (typically an access point).
    pub struct Location;
}
