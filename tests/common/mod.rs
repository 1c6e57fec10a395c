//! Shared fixture types for integration tests

#![allow(dead_code)]

use std::net::Ipv4Addr;

use carapace::attributes::{
    CastWith, ConvertEmptyToNull, EnumSerialize, GroupFrom, Hidden, MapFrom, MapTo, SnakeCase,
};
use carapace::casters::{DateTimeCaster, EnumCaster, Primitive, PrimitiveCaster};
use carapace::{
    Arguments, Attribute, ClassHydrate, ClassTransform, Context, Data, Dto, DtoEnum, DtoError,
    DtoResult, EnumCase, EnumDef, Field, IntoValue, PropertyHydrate, Schema, Transformed, Value,
};
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;

// Enumerations

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Active,
    Inactive,
}

pub static STATUS: Lazy<EnumDef> = Lazy::new(|| {
    EnumDef::string_backed(
        "Status",
        &[("PENDING", "pending"), ("ACTIVE", "active"), ("INACTIVE", "inactive")],
    )
    .with_method("description", |case| {
        Value::from(format!("Status is {}", case.name().to_lowercase()))
    })
});

impl DtoEnum for Status {
    fn definition() -> &'static EnumDef {
        &STATUS
    }

    fn from_case(case: &EnumCase) -> Option<Self> {
        match case.name() {
            "PENDING" => Some(Status::Pending),
            "ACTIVE" => Some(Status::Active),
            "INACTIVE" => Some(Status::Inactive),
            _ => None,
        }
    }

    fn case_name(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::Active => "ACTIVE",
            Status::Inactive => "INACTIVE",
        }
    }
}

carapace::dto_enum!(Status);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Pending,
    Active,
    Inactive,
}

pub static STATUS_CODE: Lazy<EnumDef> = Lazy::new(|| {
    EnumDef::int_backed(
        "StatusCode",
        &[("PENDING", 100), ("ACTIVE", 200), ("INACTIVE", 300)],
    )
});

impl DtoEnum for StatusCode {
    fn definition() -> &'static EnumDef {
        &STATUS_CODE
    }

    fn from_case(case: &EnumCase) -> Option<Self> {
        match case.name() {
            "PENDING" => Some(StatusCode::Pending),
            "ACTIVE" => Some(StatusCode::Active),
            "INACTIVE" => Some(StatusCode::Inactive),
            _ => None,
        }
    }

    fn case_name(&self) -> &'static str {
        match self {
            StatusCode::Pending => "PENDING",
            StatusCode::Active => "ACTIVE",
            StatusCode::Inactive => "INACTIVE",
        }
    }
}

carapace::dto_enum!(StatusCode);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

pub static COLOR: Lazy<EnumDef> = Lazy::new(|| {
    EnumDef::unit("Color", &["RED", "GREEN", "BLUE"]).with_method("niceName", |case| {
        let name = case.name();
        Value::from(format!("{}{}", &name[..1], name[1..].to_lowercase()))
    })
});

impl DtoEnum for Color {
    fn definition() -> &'static EnumDef {
        &COLOR
    }

    fn from_case(case: &EnumCase) -> Option<Self> {
        match case.name() {
            "RED" => Some(Color::Red),
            "GREEN" => Some(Color::Green),
            "BLUE" => Some(Color::Blue),
            _ => None,
        }
    }

    fn case_name(&self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
        }
    }
}

carapace::dto_enum!(Color);

// Address / User / Account

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postcode: String,
}

static ADDRESS: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Address")
        .field(Field::string("street"))
        .field(Field::string("city"))
        .field(Field::string("postcode"))
        .build()
});

impl Dto for Address {
    fn schema() -> &'static Schema {
        &ADDRESS
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            street: args.take("street")?,
            city: args.take("city")?,
            postcode: args.take("postcode")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.street.clone().into_value(),
            self.city.clone().into_value(),
            self.postcode.clone().into_value(),
        ]
    }
}

carapace::dto_value!(Address);

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub address: Address,
}

static USER: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("User")
        .field(Field::string("name"))
        .field(Field::string("email").attribute(MapFrom::new(["email_address"])))
        .field(Field::dto::<Address>("address"))
        .build()
});

impl Dto for User {
    fn schema() -> &'static Schema {
        &USER
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            name: args.take("name")?,
            email: args.take("email")?,
            address: args.take("address")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone().into_value(),
            self.email.clone().into_value(),
            self.address.clone().into_value(),
        ]
    }
}

carapace::dto_value!(User);

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub name: String,
    pub users: Vec<User>,
}

static ACCOUNT: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Account")
        .field(Field::string("name"))
        .field(Field::list("users").attribute(CastWith::dto::<User>()))
        .build()
});

impl Dto for Account {
    fn schema() -> &'static Schema {
        &ACCOUNT
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            name: args.take("name")?,
            users: args.take("users")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone().into_value(),
            self.users.clone().into_value(),
        ]
    }
}

/// Address folded from flat `street`/`city`/`postcode` keys
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub address: Option<Address>,
}

static CUSTOMER: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Customer")
        .field(Field::string("name"))
        .field(
            Field::dto::<Address>("address")
                .nullable()
                .attribute(GroupFrom::new(["street", "city", "postcode"])),
        )
        .build()
});

impl Dto for Customer {
    fn schema() -> &'static Schema {
        &CUSTOMER
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            name: args.take("name")?,
            address: args.take("address")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone().into_value(),
            self.address.clone().into_value(),
        ]
    }
}

// Casting

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub status: Status,
    pub code: Option<StatusCode>,
    pub placed_at: DateTime<FixedOffset>,
    pub note: Option<String>,
    pub tags: Vec<String>,
}

static ORDER: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Order")
        .field(Field::int("id").attribute(CastWith::new(PrimitiveCaster::new(Primitive::Int))))
        .field(
            Field::enumeration("status", &STATUS)
                .attribute(CastWith::new(EnumCaster::of::<Status>())),
        )
        .field(
            Field::enumeration("code", &STATUS_CODE)
                .nullable()
                .attribute(CastWith::new(EnumCaster::of::<StatusCode>()))
                .attribute(EnumSerialize::name()),
        )
        .field(Field::datetime("placed_at").attribute(CastWith::new(DateTimeCaster::default())))
        .field(Field::string("note").nullable().attribute(ConvertEmptyToNull))
        .field(Field::list("tags").default_value(Vec::<Value>::new()))
        .build()
});

impl Dto for Order {
    fn schema() -> &'static Schema {
        &ORDER
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            id: args.take("id")?,
            status: args.take("status")?,
            code: args.take("code")?,
            placed_at: args.take("placed_at")?,
            note: args.take("note")?,
            tags: args.take("tags")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.id.into_value(),
            self.status.into_value(),
            self.code.into_value(),
            self.placed_at.into_value(),
            self.note.clone().into_value(),
            self.tags.clone().into_value(),
        ]
    }
}

// Empty-to-null

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub nickname: Option<String>,
    pub title: String,
}

static PROFILE: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Profile")
        .field(Field::string("nickname").nullable().attribute(ConvertEmptyToNull))
        .field(Field::string("title").attribute(ConvertEmptyToNull))
        .build()
});

impl Dto for Profile {
    fn schema() -> &'static Schema {
        &PROFILE
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            nickname: args.take("nickname")?,
            title: args.take("title")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.nickname.clone().into_value(),
            self.title.clone().into_value(),
        ]
    }
}

// Serialization

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub secret: String,
}

static CREDENTIALS: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Credentials")
        .field(Field::string("username"))
        .field(Field::string("secret").attribute(Hidden))
        .build()
});

impl Dto for Credentials {
    fn schema() -> &'static Schema {
        &CREDENTIALS
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            username: args.take("username")?,
            secret: args.take("secret")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.username.clone().into_value(),
            self.secret.clone().into_value(),
        ]
    }
}

/// Every field hidden at class scope
#[derive(Debug, Clone, PartialEq)]
pub struct Sealed {
    pub token: String,
}

static SEALED: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Sealed")
        .attribute(Hidden)
        .field(Field::string("token").attribute(MapTo::new("visible_token")))
        .build()
});

impl Dto for Sealed {
    fn schema() -> &'static Schema {
        &SEALED
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            token: args.take("token")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![self.token.clone().into_value()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub accent: Color,
    pub fallback: Color,
}

static PALETTE: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Palette")
        .field(
            Field::enumeration("primary", &COLOR)
                .attribute(CastWith::new(EnumCaster::of::<Color>()))
                .attribute(EnumSerialize::method("niceName")),
        )
        .field(
            Field::enumeration("accent", &COLOR)
                .attribute(CastWith::new(EnumCaster::of::<Color>()))
                .attribute(EnumSerialize::name()),
        )
        .field(
            Field::enumeration("fallback", &COLOR)
                .attribute(CastWith::new(EnumCaster::of::<Color>())),
        )
        .build()
});

impl Dto for Palette {
    fn schema() -> &'static Schema {
        &PALETTE
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            primary: args.take("primary")?,
            accent: args.take("accent")?,
            fallback: args.take("fallback")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.primary.into_value(),
            self.accent.into_value(),
            self.fallback.into_value(),
        ]
    }
}

// Inheritance and snake_case

pub static BASE: Lazy<Schema> = Lazy::new(|| Schema::builder("Base").attribute(SnakeCase).build());

#[derive(Debug, Clone, PartialEq)]
pub struct FirstName {
    pub first_name: String,
}

static FIRST_NAME: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("FirstName")
        .extends(&BASE)
        .field(Field::string("firstName"))
        .build()
});

impl Dto for FirstName {
    fn schema() -> &'static Schema {
        &FIRST_NAME
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            first_name: args.take("firstName")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![self.first_name.clone().into_value()]
    }
}

/// Class-level snake_case next to explicit renames
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub display_name: String,
    pub last_name: String,
    pub member_since: i64,
}

static MEMBER: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Member")
        .attribute(SnakeCase)
        .field(Field::string("displayName").attribute(MapTo::new("screenName")))
        .field(Field::string("lastName").attribute(MapFrom::new(["surname"])))
        .field(Field::int("memberSince"))
        .build()
});

impl Dto for Member {
    fn schema() -> &'static Schema {
        &MEMBER
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            display_name: args.take("displayName")?,
            last_name: args.take("lastName")?,
            member_since: args.take("memberSince")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.display_name.clone().into_value(),
            self.last_name.clone().into_value(),
            self.member_since.into_value(),
        ]
    }
}

// Post-hydration handlers

#[derive(Debug)]
pub struct ValidateIpv4;

impl PropertyHydrate for ValidateIpv4 {
    fn property_hydrate(&self, field: &Field, data: &mut Data, _ctx: &Context<'_>) -> DtoResult<()> {
        let value = data.get(field.name());
        match value.as_str().map(str::parse::<Ipv4Addr>) {
            Some(Ok(_)) => Ok(()),
            _ => Err(DtoError::Validation {
                field: field.name().to_string(),
                message: "must be an IPv4 address".to_string(),
            }),
        }
    }
}

impl Attribute for ValidateIpv4 {
    fn as_property_hydrate(&self) -> Option<&dyn PropertyHydrate> {
        Some(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub ip: String,
}

static SERVER: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Server")
        .field(Field::string("ip").attribute(ValidateIpv4))
        .build()
});

impl Dto for Server {
    fn schema() -> &'static Schema {
        &SERVER
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            ip: args.take("ip")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![self.ip.clone().into_value()]
    }
}

/// Upper-cases every output key
#[derive(Debug)]
pub struct UpperKeys;

impl ClassTransform for UpperKeys {
    fn class_transform(&self, _field: &Field, key: &str, value: Value) -> DtoResult<Transformed> {
        Ok(Transformed::Keep {
            key: key.to_uppercase(),
            value,
        })
    }
}

impl Attribute for UpperKeys {
    fn as_class_transform(&self) -> Option<&dyn ClassTransform> {
        Some(self)
    }
}

/// Own `UpperKeys` over an inherited `SnakeCase`
#[derive(Debug, Clone, PartialEq)]
pub struct Shouting {
    pub first_name: String,
}

static SHOUTING: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Shouting")
        .extends(&BASE)
        .attribute(UpperKeys)
        .field(Field::string("firstName"))
        .build()
});

impl Dto for Shouting {
    fn schema() -> &'static Schema {
        &SHOUTING
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            first_name: args.take("firstName")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![self.first_name.clone().into_value()]
    }
}

pub static HIDDEN_BASE: Lazy<Schema> =
    Lazy::new(|| Schema::builder("HiddenBase").attribute(Hidden).build());

/// Own `UpperKeys` over an inherited class-level `Hidden`
#[derive(Debug, Clone, PartialEq)]
pub struct Muted {
    pub first_name: String,
}

static MUTED: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Muted")
        .extends(&HIDDEN_BASE)
        .attribute(UpperKeys)
        .field(Field::string("firstName"))
        .build()
});

impl Dto for Muted {
    fn schema() -> &'static Schema {
        &MUTED
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            first_name: args.take("firstName")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![self.first_name.clone().into_value()]
    }
}

/// Replaces empty strings with `"default"` on every present field
#[derive(Debug)]
pub struct EnsureNonEmpty;

impl ClassHydrate for EnsureNonEmpty {
    fn class_hydrate(&self, field: &Field, data: &mut Data, _ctx: &Context<'_>) -> DtoResult<()> {
        if data.get(field.name()).as_str() == Some("") {
            data.set(field.name(), Value::from("default"));
        }
        Ok(())
    }
}

impl Attribute for EnsureNonEmpty {
    fn as_class_hydrate(&self) -> Option<&dyn ClassHydrate> {
        Some(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostPort {
    pub host: String,
    pub port: i64,
}

static HOST_PORT: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("HostPort")
        .attribute(EnsureNonEmpty)
        .field(Field::string("host"))
        .field(Field::int("port").default_value(80))
        .build()
});

impl Dto for HostPort {
    fn schema() -> &'static Schema {
        &HOST_PORT
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            host: args.take("host")?,
            port: args.take("port")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![self.host.clone().into_value(), self.port.into_value()]
    }
}

// Recursion

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub child: Option<Box<Node>>,
}

static NODE: Lazy<Schema> = Lazy::new(|| {
    Schema::builder("Node")
        .field(Field::string("name"))
        .field(Field::dto::<Node>("child").nullable())
        .build()
});

impl Dto for Node {
    fn schema() -> &'static Schema {
        &NODE
    }

    fn construct(args: &mut Arguments) -> DtoResult<Self> {
        Ok(Self {
            name: args.take("name")?,
            child: args.take("child")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone().into_value(),
            self.child.clone().into_value(),
        ]
    }
}

carapace::dto_value!(Node);

/// A type with no fields at all
#[derive(Debug, Clone, PartialEq)]
pub struct Marker;

static MARKER: Lazy<Schema> = Lazy::new(|| Schema::builder("Marker").build());

impl Dto for Marker {
    fn schema() -> &'static Schema {
        &MARKER
    }

    fn construct(_args: &mut Arguments) -> DtoResult<Self> {
        Ok(Marker)
    }

    fn values(&self) -> Vec<Value> {
        Vec::new()
    }
}

/// `{"street": .., "city": .., "postcode": ..}` for quick inputs
pub fn address_json(street: &str) -> serde_json::Value {
    serde_json::json!({"street": street, "city": "C", "postcode": "P"})
}
