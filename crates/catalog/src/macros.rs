//! Declarative helpers that generate the typed wrapper surface of each
//! catalog entity from its descriptor.

/// Declares a newtype wrapper over [`waybill_core::Entity`] bound to one
/// static descriptor.
macro_rules! entity_wrapper {
    ($(#[$meta:meta])* $name:ident => $descriptor:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(waybill_core::Entity);

        impl $name {
            /// An empty entity with declared defaults applied.
            pub fn new() -> Self {
                $name(waybill_core::Entity::new(&$descriptor))
            }

            pub fn entity(&self) -> &waybill_core::Entity {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl waybill_core::EntityType for $name {
            const DESCRIPTOR: &'static waybill_core::EntityDescriptor = &$descriptor;

            fn wrap(entity: waybill_core::Entity) -> Self {
                $name(entity)
            }

            fn as_entity(&self) -> &waybill_core::Entity {
                &self.0
            }

            fn into_entity(self) -> waybill_core::Entity {
                self.0
            }
        }

        impl AsRef<waybill_core::Entity> for $name {
            fn as_ref(&self) -> &waybill_core::Entity {
                &self.0
            }
        }

        impl From<$name> for waybill_core::Entity {
            fn from(wrapper: $name) -> Self {
                wrapper.0
            }
        }

        impl TryFrom<waybill_core::Entity> for $name {
            type Error = waybill_core::Error;

            fn try_from(entity: waybill_core::Entity) -> waybill_core::Result<Self> {
                <$name as waybill_core::EntityType>::from_entity(entity)
            }
        }
    };
}

/// Generates a getter and a validating setter per field. The getter name
/// is the field's in-memory name; setters return `&mut Self` so calls
/// chain with `?`.
///
/// ```ignore
/// accessors!(Address {
///     city / set_city: text,
///     house_nr / set_house_nr: text,
/// });
/// ```
macro_rules! accessors {
    ($ty:ident { $($getter:ident / $setter:ident : $kind:tt $(($arg:ty))?),* $(,)? }) => {
        impl $ty {
            $( accessors!(@field $getter $setter $kind $(($arg))?); )*
        }
    };

    (@field $getter:ident $setter:ident text) => {
        pub fn $getter(&self) -> Option<&str> {
            self.0.text(stringify!($getter))
        }

        pub fn $setter(&mut self, value: impl Into<String>) -> waybill_core::Result<&mut Self> {
            self.0.set(stringify!($getter), value.into())?;
            Ok(self)
        }
    };

    (@field $getter:ident $setter:ident phone) => {
        pub fn $getter(&self) -> Option<&str> {
            self.0.text(stringify!($getter))
        }

        /// Stores the number, normalized to international format when a
        /// two-letter `region` is given.
        pub fn $setter(
            &mut self,
            raw: &str,
            region: Option<&str>,
        ) -> waybill_core::Result<&mut Self> {
            self.0.set_phone(stringify!($getter), raw, region)?;
            Ok(self)
        }
    };

    (@field $getter:ident $setter:ident integer) => {
        pub fn $getter(&self) -> Option<i64> {
            self.0.integer(stringify!($getter))
        }

        pub fn $setter(&mut self, value: i64) -> waybill_core::Result<&mut Self> {
            self.0.set(stringify!($getter), value)?;
            Ok(self)
        }
    };

    (@field $getter:ident $setter:ident decimal) => {
        pub fn $getter(&self) -> Option<::rust_decimal::Decimal> {
            self.0.decimal(stringify!($getter))
        }

        pub fn $setter(
            &mut self,
            value: ::rust_decimal::Decimal,
        ) -> waybill_core::Result<&mut Self> {
            self.0.set(stringify!($getter), value)?;
            Ok(self)
        }
    };

    (@field $getter:ident $setter:ident boolean) => {
        pub fn $getter(&self) -> Option<bool> {
            self.0.boolean(stringify!($getter))
        }

        pub fn $setter(&mut self, value: bool) -> waybill_core::Result<&mut Self> {
            self.0.set(stringify!($getter), value)?;
            Ok(self)
        }
    };

    (@field $getter:ident $setter:ident date) => {
        pub fn $getter(&self) -> Option<::time::Date> {
            self.0.date(stringify!($getter))
        }

        pub fn $setter(&mut self, value: ::time::Date) -> waybill_core::Result<&mut Self> {
            self.0.set(stringify!($getter), value)?;
            Ok(self)
        }
    };

    (@field $getter:ident $setter:ident date_time) => {
        pub fn $getter(&self) -> Option<::time::PrimitiveDateTime> {
            self.0.date_time(stringify!($getter))
        }

        pub fn $setter(
            &mut self,
            value: ::time::PrimitiveDateTime,
        ) -> waybill_core::Result<&mut Self> {
            self.0.set(stringify!($getter), value)?;
            Ok(self)
        }
    };

    (@field $getter:ident $setter:ident time) => {
        pub fn $getter(&self) -> Option<::time::Time> {
            self.0.time(stringify!($getter))
        }

        pub fn $setter(&mut self, value: ::time::Time) -> waybill_core::Result<&mut Self> {
            self.0.set(stringify!($getter), value)?;
            Ok(self)
        }
    };

    (@field $getter:ident $setter:ident texts) => {
        pub fn $getter(&self) -> Option<&[String]> {
            self.0.texts(stringify!($getter))
        }

        pub fn $setter<I, S>(&mut self, values: I) -> waybill_core::Result<&mut Self>
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let values: Vec<String> = values.into_iter().map(Into::into).collect();
            self.0.set(stringify!($getter), values)?;
            Ok(self)
        }
    };

    (@field $getter:ident $setter:ident entity($nested:ty)) => {
        pub fn $getter(&self) -> Option<&waybill_core::Entity> {
            self.0.entity(stringify!($getter))
        }

        pub fn $setter(&mut self, value: $nested) -> waybill_core::Result<&mut Self> {
            self.0.set(stringify!($getter), waybill_core::Entity::from(value))?;
            Ok(self)
        }
    };

    (@field $getter:ident $setter:ident entities($nested:ty)) => {
        pub fn $getter(&self) -> Option<&[waybill_core::Entity]> {
            self.0.entities(stringify!($getter))
        }

        pub fn $setter<I>(&mut self, values: I) -> waybill_core::Result<&mut Self>
        where
            I: IntoIterator<Item = $nested>,
        {
            let values: Vec<waybill_core::Entity> =
                values.into_iter().map(waybill_core::Entity::from).collect();
            self.0.set(stringify!($getter), values)?;
            Ok(self)
        }
    };
}
