mod helpers;

mod composer_flow;
mod feed_flow;
mod grouping;
