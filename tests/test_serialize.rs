use pretty_assertions::assert_eq;
use serde::Serialize;
use tagged_qs::{Config, QueryOption, query_record};

query_record! {
    #[derive(Clone, Debug, Default, PartialEq)]
    struct Westeros {
        westeros: String => "world",
        year: i64 => "decade",
    }
}

query_record! {
    #[derive(Clone, Debug, Default, PartialEq)]
    struct Flags {
        westeros: bool => "world",
        behind_the_wall: bool => "north",
    }
}

query_record! {
    struct Empty {}
}

#[derive(Serialize)]
struct Address {
    city: String,
    postcode: String,
}

#[test]
fn serialize_empty_record() {
    assert_eq!(tagged_qs::stringify(&Empty {}, &[]), "");
    assert_eq!(tagged_qs::stringify(&Empty {}, &[QueryOption::SkipEmpty]), "");
}

#[test]
fn serialize_text() {
    query_record! {
        struct Query {
            westeros: String => "world",
        }
    }

    let query = Query {
        westeros: "hello".to_owned(),
    };
    assert_eq!(tagged_qs::stringify(&query, &[]), "world=hello");
}

#[test]
fn serialize_text_and_integer() {
    let params = Westeros {
        westeros: "hello".to_owned(),
        year: 1230,
    };
    insta::assert_snapshot!(tagged_qs::stringify(&params, &[]), @"decade=1230&world=hello");
}

#[test]
fn serialize_sorts_keys() {
    query_record! {
        struct Query {
            zulu: i64 => "z",
            alpha: i64 => "b",
            mike: i64 => "a",
        }
    }

    let query = Query {
        zulu: 1,
        alpha: 2,
        mike: 3,
    };
    assert_eq!(tagged_qs::stringify(&query, &[]), "a=3&b=2&z=1");
}

#[test]
fn serialize_negative_integer() {
    let params = Westeros {
        westeros: "winter".to_owned(),
        year: -300,
    };
    assert_eq!(tagged_qs::stringify(&params, &[]), "decade=-300&world=winter");
}

#[test]
fn serialize_booleans() {
    let flags = Flags {
        westeros: true,
        behind_the_wall: false,
    };
    assert_eq!(tagged_qs::stringify(&flags, &[]), "north=false&world=true");
}

#[test]
fn serialize_empty_values() {
    assert_eq!(
        tagged_qs::stringify(&Westeros::default(), &[]),
        "decade=0&world="
    );
}

#[test]
fn skip_empty_omits_empty_values() {
    assert_eq!(
        tagged_qs::stringify(&Westeros::default(), &[QueryOption::SkipEmpty]),
        ""
    );
}

#[test]
fn skip_empty_keeps_non_empty_values() {
    let params = Westeros {
        westeros: String::new(),
        year: 1230,
    };
    assert_eq!(
        tagged_qs::stringify(&params, &[QueryOption::SkipEmpty]),
        "decade=1230"
    );

    let params = Westeros {
        westeros: "hello".to_owned(),
        year: 0,
    };
    assert_eq!(
        tagged_qs::stringify(&params, &[QueryOption::SkipEmpty]),
        "world=hello"
    );
}

#[test]
fn skip_empty_never_skips_booleans() {
    for (westeros, behind_the_wall) in [(false, false), (true, false), (false, true), (true, true)] {
        let flags = Flags {
            westeros,
            behind_the_wall,
        };
        assert_eq!(
            tagged_qs::stringify(&flags, &[QueryOption::SkipEmpty]),
            tagged_qs::stringify(&flags, &[]),
        );
    }

    assert_eq!(
        tagged_qs::stringify(&Flags::default(), &[QueryOption::SkipEmpty]),
        "north=false&world=false"
    );
}

#[test]
fn unannotated_fields_are_skipped() {
    query_record! {
        struct Query {
            westeros: String => "world",
            secret: String,
        }
    }

    let query = Query {
        westeros: "hello".to_owned(),
        secret: "hodor".to_owned(),
    };
    assert_eq!(tagged_qs::stringify(&query, &[]), "world=hello");
}

#[test]
fn unsupported_values_are_skipped() {
    query_record! {
        struct Query {
            westeros: String => "world",
            ratio: f64 => "ratio",
            count: u32 => "count",
            ids: Vec<i64> => "ids",
            maybe: Option<String> => "maybe",
            address: Address => "address",
        }
    }

    let query = Query {
        westeros: "hello".to_owned(),
        ratio: 0.5,
        count: 3,
        ids: vec![1, 2],
        maybe: Some("x".to_owned()),
        address: Address {
            city: "Carrot City".to_owned(),
            postcode: "12345".to_owned(),
        },
    };
    assert_eq!(tagged_qs::stringify(&query, &[]), "world=hello");
}

#[test]
fn annotations_are_used_verbatim() {
    query_record! {
        struct Query {
            name: String => "user name",
            page: i64 => "page[number]",
        }
    }

    let query = Query {
        name: "Jon Snow".to_owned(),
        page: 2,
    };
    assert_eq!(
        tagged_qs::stringify(&query, &[]),
        "page%5Bnumber%5D=2&user+name=Jon+Snow"
    );
    let collected = tagged_qs::to_query(&query, &[]);
    assert_eq!(collected.get("user name"), Some("Jon Snow"));
    assert_eq!(collected.get("page[number]"), Some("2"));
}

#[test]
fn repeated_annotations_keep_declaration_order() {
    query_record! {
        struct Query {
            first: String => "tag",
            second: String => "tag",
        }
    }

    let query = Query {
        first: "winter".to_owned(),
        second: "is coming".to_owned(),
    };
    assert_eq!(
        tagged_qs::stringify(&query, &[]),
        "tag=winter&tag=is+coming"
    );
}

#[test]
fn newtypes_are_transparent() {
    #[derive(Serialize)]
    struct House(String);

    query_record! {
        struct Query {
            house: House => "house",
        }
    }

    let query = Query {
        house: House("Stark".to_owned()),
    };
    assert_eq!(tagged_qs::stringify(&query, &[]), "house=Stark");
}

#[test]
fn config_matches_options() {
    let params = Westeros {
        westeros: String::new(),
        year: 1230,
    };
    let config = Config::new().skip_empty(true);
    assert_eq!(
        config.stringify(&params),
        tagged_qs::stringify(&params, &[QueryOption::SkipEmpty])
    );
    assert_eq!(config.to_query(&params).len(), 1);
}

#[test]
fn records_behind_references_and_boxes() {
    let params = Westeros {
        westeros: "hello".to_owned(),
        year: 1230,
    };
    let boxed: Box<Westeros> = Box::new(params.clone());
    assert_eq!(tagged_qs::stringify(&&params, &[]), "decade=1230&world=hello");
    assert_eq!(tagged_qs::stringify(&boxed, &[]), "decade=1230&world=hello");
}
