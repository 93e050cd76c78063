// Text preprocessing: turns raw article text into the token stream that
// the topic scorers consume.

pub mod normalizer;
