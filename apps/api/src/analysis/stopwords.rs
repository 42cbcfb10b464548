//! Static Portuguese + English stopword set.
//!
//! Job postings in this product's market routinely mix both languages, so a
//! single combined set is consulted for every token. The set is process-wide
//! constant configuration, never mutated at runtime.

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            // Portuguese
            "de", "da", "do", "das", "dos", "em", "na", "no", "nas", "nos", "com", "para", "por",
            "pela", "pelo", "pelas", "pelos", "um", "uma", "uns", "umas", "o", "a", "os", "as",
            "que", "se", "é", "são", "foi", "foram", "ser", "estar", "ter", "haver", "mais",
            "muito", "bem", "como", "quando", "onde", "porque", "mas", "ou", "também", "já",
            "ainda", "só", "até", "sobre", "entre", "sem", "após", "antes", "durante", "desde",
            "através", "dentro", "fora", "acima", "abaixo", "ao", "aos", "à", "às", "sua", "seu",
            "suas", "seus", "nossa", "nosso", "nossas", "nossos", "minha", "meu", "minhas",
            "meus", "esta", "este", "estas", "estes", "essa", "esse", "essas", "esses", "aquela",
            "aquele", "aquelas", "aqueles", "isso", "isto", "aquilo", "ela", "ele", "elas",
            "eles", "nós", "vocês", "você", "eu", "me", "mim", "te", "ti", "lhe", "lhes", "vos",
            "si", "consigo", "conosco", "convosco", "será", "seria", "sendo", "sido", "tendo",
            "tido", "fazendo", "feito", "fazem", "faz", "fazer", "pode", "podem", "podendo",
            "deve", "devem", "devendo", "quer", "querem", "querendo", "vai", "vão", "indo",
            "vem", "vêm", "vindo", "diz", "dizem", "dizendo", "disse", "disseram", "dito", "vê",
            "veem", "vendo", "viu", "viram", "visto", "dá", "dão", "dando", "deu", "deram",
            "dado", "fica", "ficam", "ficando", "ficou", "ficaram", "ficado",
            // English
            "the", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
            "from", "up", "about", "into", "over", "after", "is", "are", "was", "were", "be",
            "been", "being", "have", "has", "had", "do", "does", "did", "will", "would", "could",
            "should", "may", "might", "must", "can", "shall", "this", "that", "these", "those",
            "i", "you", "he", "she", "it", "we", "they", "him", "her", "us", "them", "my",
            "your", "his", "its", "our", "their", "what", "which", "who", "when", "where",
            "why", "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
            "such", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t",
            "just", "don", "now", "get", "go", "come", "see", "know", "take", "give", "make",
            "work", "use", "find", "tell", "ask", "seem", "feel", "try", "leave", "call",
            "good", "new", "first", "last", "long", "great", "little", "old", "right", "big",
            "high", "different", "small", "large", "next", "early", "young", "important",
            "public", "bad",
        ];
        words.iter().copied().collect()
    };
}

/// Exact membership test; the input is expected to be lowercased already.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_function_words_are_stopwords() {
        assert!(is_stopword("the"));
        assert!(is_stopword("with"));
        assert!(is_stopword("should"));
    }

    #[test]
    fn test_portuguese_function_words_are_stopwords() {
        assert!(is_stopword("para"));
        assert!(is_stopword("também"));
        assert!(is_stopword("através"));
    }

    #[test]
    fn test_domain_terms_are_not_stopwords() {
        assert!(!is_stopword("python"));
        assert!(!is_stopword("engenharia"));
        assert!(!is_stopword("sql"));
    }

    #[test]
    fn test_membership_is_case_sensitive_by_contract() {
        // Callers lowercase before consulting the set.
        assert!(!is_stopword("The"));
    }
}
