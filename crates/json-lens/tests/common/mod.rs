#![allow(dead_code)]

use json_lens::builders::{jarray, jobject, jpair};
use json_lens::Value;

pub fn book(title: &str, description: &str, image: &str, price: &str, qty: i32) -> Value {
    jobject([
        jpair("title", title),
        jpair("description", description),
        jpair("imageUrl", image),
        jpair("price", price),
        jpair("qty", qty),
    ])
}

pub fn foo_book(qty: i32) -> Value {
    book(
        "The Big Book of Foo",
        "Bestselling book of Foo by A.N. Other",
        "/images/books/12345.gif",
        "$10.00",
        qty,
    )
}

pub fn pocket_book(qty: i32) -> Value {
    book(
        "Javascript Pocket Reference",
        "Handy pocket-sized reference for the Javascript language",
        "/images/books/56789.gif",
        "$5.50",
        qty,
    )
}

pub fn cart_with(items: Vec<Value>) -> Value {
    jobject([
        jpair("itemCount", 2),
        jpair("subtotal", "$15.50"),
        jpair("items", jarray(items)),
    ])
}

/// The two-book shopping cart used across the matrices.
pub fn cart() -> Value {
    cart_with(vec![foo_book(1), pocket_book(2)])
}

pub fn puppies() -> Value {
    let puppy = |color: &str| jobject([jpair("hat", color)]);
    jobject([jpair(
        "puppies",
        jobject([
            jpair("Alice", puppy("red")),
            jpair("Bob", puppy("green")),
            jpair("Charlie", puppy("blue")),
        ]),
    )])
}
