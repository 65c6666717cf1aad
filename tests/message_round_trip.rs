//! Integration tests for message parsing and serialization
//!
//! Real server replies must parse into the expected parts and serialize back
//! to exactly the line they came from.

use slirc_client::{Body, Command, Message, Prefix, Response, ValidationError};

struct Fixture {
    raw: &'static str,
    host: &'static str,
    reply: Response,
    params: &'static [&'static str],
}

const SERVER_REPLIES: &[Fixture] = &[
    Fixture {
        raw: ":irc.example.net 001 testuser :Welcome testuser!~john.doe@172.17.0.1",
        host: "irc.example.net",
        reply: Response::RPL_WELCOME,
        params: &["testuser", "Welcome testuser!~john.doe@172.17.0.1"],
    },
    Fixture {
        raw: ":irc.some.host.org 002 testuser :Your host is irc.some.host.org, running version ngircd-23 (x86_64/alpine/linux-musl)",
        host: "irc.some.host.org",
        reply: Response::RPL_YOURHOST,
        params: &[
            "testuser",
            "Your host is irc.some.host.org, running version ngircd-23 (x86_64/alpine/linux-musl)",
        ],
    },
    Fixture {
        raw: ":irc.my-special-host.co.uk 003 testuser :This server has been started Mon Mar 06 2017 at 22:01:14 (UTC)",
        host: "irc.my-special-host.co.uk",
        reply: Response::RPL_CREATED,
        params: &[
            "testuser",
            "This server has been started Mon Mar 06 2017 at 22:01:14 (UTC)",
        ],
    },
    Fixture {
        raw: ":localhost 004 johndoe localhost ngircd-23 abBcCFiIoqrRswx abehiIklmMnoOPqQrRstvVz",
        host: "localhost",
        reply: Response::RPL_MYINFO,
        params: &[
            "johndoe",
            "localhost",
            "ngircd-23",
            "abBcCFiIoqrRswx",
            "abehiIklmMnoOPqQrRstvVz",
        ],
    },
    Fixture {
        raw: ":irc.example.com 005 testuser CHANNELLEN=50 NICKLEN=9 TOPICLEN=490 AWAYLEN=127 KICKLEN=400 MODES=5 MAXLIST=beI:50 EXCEPTS=e INVEX=I PENALTY :are supported on this server",
        host: "irc.example.com",
        reply: Response::RPL_ISUPPORT,
        params: &[
            "testuser",
            "CHANNELLEN=50",
            "NICKLEN=9",
            "TOPICLEN=490",
            "AWAYLEN=127",
            "KICKLEN=400",
            "MODES=5",
            "MAXLIST=beI:50",
            "EXCEPTS=e",
            "INVEX=I",
            "PENALTY",
            "are supported on this server",
        ],
    },
];

#[test]
fn test_parse_server_replies() {
    for fixture in SERVER_REPLIES {
        let message: Message = fixture.raw.parse().expect("Failed to parse server reply");

        assert_eq!(message.prefix, Prefix::hostname(fixture.host), "{}", fixture.raw);
        assert_eq!(message.command, Command::Response(fixture.reply), "{}", fixture.raw);
        assert_eq!(message.params, fixture.params, "{}", fixture.raw);
        assert!(message.command.is_numeric_reply());
    }
}

#[test]
fn test_serialize_server_replies() {
    for fixture in SERVER_REPLIES {
        let message = Message::new(
            Prefix::hostname(fixture.host),
            Command::Response(fixture.reply),
            fixture.params.iter().copied(),
        );
        assert_eq!(message.to_string(), fixture.raw);
    }
}

#[test]
fn test_prefix_forms_round_trip() {
    let cases = [
        ("irc.example.com", Prefix::hostname("irc.example.com")),
        (
            "johndoe!jdoe@client.example.com",
            Prefix::new("johndoe", "jdoe", "client.example.com"),
        ),
        (
            "janedoe@anotherclient.example.com",
            Prefix::NicknameHost {
                nickname: "janedoe".to_string(),
                host: "anotherclient.example.com".to_string(),
            },
        ),
    ];

    for (raw, expected) in cases {
        let prefix = Prefix::parse(raw);
        assert_eq!(prefix, expected);
        assert_eq!(prefix.to_string(), raw);
    }
}

#[test]
fn test_message_round_trip_with_prefix() {
    let original = ":nick!user@host PRIVMSG #channel :Hello, world!";
    let message: Message = original.parse().expect("Failed to parse message");

    assert_eq!(message.source_nickname(), Some("nick"));
    assert_eq!(message.to_string(), original);
}

#[test]
fn test_empty_prefix_keeps_colon_marker() {
    let message = Message::without_prefix(Command::NICK, ["john_doe"]);
    assert_eq!(message.to_string(), ": NICK john_doe");

    let reparsed: Message = message.to_string().parse().expect("Failed to reparse");
    assert_eq!(reparsed, message);
}

#[test]
fn test_quit_reason() {
    let message = Message::quit("Bye, folks!");
    match message.body().expect("QUIT has a body") {
        Body::Quit { reason } => assert_eq!(reason.as_deref(), Some("Bye, folks!")),
        other => panic!("unexpected body: {:?}", other),
    }
}

#[test]
fn test_sixteen_params_is_invalid() {
    let params: Vec<String> = (1..=16).map(|i| i.to_string()).collect();
    let message = Message::without_prefix(Command::USER, params);

    assert!(!message.is_valid());
    let errors = message.validate().unwrap_err();
    assert!(errors.contains(&ValidationError::TooManyParams { count: 16, max: 15 }));
}

#[test]
fn test_invalid_lines_are_rejected() {
    for raw in ["", "\r\n", ":irc.example.com", ":irc.example.com ", "PRIV$MSG #a b"] {
        assert!(raw.parse::<Message>().is_err(), "{:?} should not parse", raw);
    }
}
