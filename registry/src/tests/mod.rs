#![cfg(test)]
mod dispatch;
mod facade;
