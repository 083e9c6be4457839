//! Published BIP-39 test vectors
//!
//! English vectors use the passphrase "TREZOR".

use moke_crypto::mnemonic::{decode, Mnemonic};
use moke_crypto::wordlist::WordlistRegistry;
use moke_crypto::{
    entropy_to_mnemonic, mnemonic_bytes_to_seed, mnemonic_to_entropy, mnemonic_to_seed,
    validate_mnemonic, Language, MnemonicError,
};
use unicode_normalization::UnicodeNormalization;

struct Vector {
    entropy: &'static str,
    mnemonic: &'static str,
    seed: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        entropy: "00000000000000000000000000000000",
        mnemonic: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        seed: "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04",
    },
    Vector {
        entropy: "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        mnemonic: "legal winner thank year wave sausage worth useful legal winner thank yellow",
        seed: "2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607",
    },
    Vector {
        entropy: "80808080808080808080808080808080",
        mnemonic: "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
        seed: "d71de856f81a8acc65e6fc851a38d4d7ec216fd0796d0a6827a3ad6ed5511a30fa280f12eb2e47ed2ac03b5c462a0358d18d69fe4f985ec81778c1b370b652a8",
    },
    Vector {
        entropy: "ffffffffffffffffffffffffffffffff",
        mnemonic: "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        seed: "ac27495480225222079d7be181583751e86f571027b0497b5b5d11218e0a8a13332572917f0f8e5a589620c6f15b11c61dee327651a14c34e18231052e48c069",
    },
    Vector {
        entropy: "0000000000000000000000000000000000000000",
        mnemonic: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon address",
        seed: "fa08713f46bf5cb48728ceb70e3aae1bc53c5cb7b4e29c5610261d1cbb7be3bed4d805256fec515754d2be35974fc5da678168e9d9bb0cb70948026923b0def3",
    },
    Vector {
        entropy: "000000000000000000000000000000000000000000000000",
        mnemonic: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon agent",
        seed: "035895f2f481b1b0f01fcf8c289c794660b289981a78f8106447707fdd9666ca06da5a9a565181599b79f53b844d8a71dd9f439c52a3d7b3e8a79c906ac845fa",
    },
    Vector {
        entropy: "00000000000000000000000000000000000000000000000000000000",
        mnemonic: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon admit",
        seed: "e7dadc189d2e8d07ac278d9ec98a1d2d327e4a6b7df494c00cbf2cbf2d3543dac7000fc72d4ada8d9997dc8db388ff22c6d79f604a7455f2df5534a28eee04c6",
    },
    Vector {
        entropy: "0000000000000000000000000000000000000000000000000000000000000000",
        mnemonic: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
        seed: "bda85446c68413707090a52022edd26a1c9462295029f2e60cd7c4f2bbd3097170af7a4d73245cafa9c3cca8d561a7c3de6f5d4a10be8ed2a5e608d68f92fcc8",
    },
    Vector {
        entropy: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        mnemonic: "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
        seed: "dd48c104698c30cfe2b6142103248622fb7bb0ff692eebb00089b32d22484e1613912f0a5b694407be899ffd31ed3992c456cdf60f5d4564b8ba3f05a69890ad",
    },
    Vector {
        entropy: "9e885d952ad362caeb4efe34a8e91bd2",
        mnemonic: "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
        seed: "274ddc525802f7c828d8ef7ddbcdc5304e87ac3535913611fbbfa986d0c9e5476c91689f9c8a54fd55bd38606aa6a8595ad213d4c9c9f9aca3fb217069a41028",
    },
    Vector {
        entropy: "68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c",
        mnemonic: "hamster diagram private dutch cause delay private meat slide toddler razor book happy fancy gospel tennis maple dilemma loan word shrug inflict delay length",
        seed: "64c87cde7e12ecf6704ab95bb1408bef047c22db4cc7491c4271d170a1b213d20b385bc1588d9c7b38f1b39d415665b8a9030c9ec653d75e65f847d8fc1fc440",
    },
];

#[test]
fn test_english_vectors_encode() {
    for vector in VECTORS {
        let entropy = hex::decode(vector.entropy).unwrap();
        let phrase = entropy_to_mnemonic(&entropy, Language::English).unwrap();
        assert_eq!(phrase, vector.mnemonic, "entropy {}", vector.entropy);
    }
}

#[test]
fn test_english_vectors_decode() {
    for vector in VECTORS {
        let entropy = mnemonic_to_entropy(vector.mnemonic, Language::English).unwrap();
        assert_eq!(entropy.to_hex(), vector.entropy);
        assert!(validate_mnemonic(vector.mnemonic, Language::English).valid);
    }
}

#[test]
fn test_english_vectors_seed() {
    for vector in VECTORS {
        let seed = mnemonic_to_seed(vector.mnemonic, "TREZOR");
        assert_eq!(seed.to_hex(), vector.seed, "mnemonic {}", vector.mnemonic);

        let seed = mnemonic_bytes_to_seed(vector.mnemonic.as_bytes(), b"TREZOR").unwrap();
        assert_eq!(seed.to_hex(), vector.seed);
    }
}

#[test]
fn test_zero_entropy_empty_passphrase() {
    let seed = mnemonic_to_seed(VECTORS[0].mnemonic, "");
    assert_eq!(
        seed.to_hex(),
        "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
    );
}

#[test]
fn test_japanese_vector() {
    let phrase = entropy_to_mnemonic(&[0u8; 16], Language::Japanese).unwrap();

    let words: Vec<&str> = phrase.split('\u{3000}').collect();
    assert_eq!(words.len(), 12);
    let first: String = "あいこくしん".nfkd().collect();
    let last: String = "あおぞら".nfkd().collect();
    assert!(words[..11].iter().all(|w| *w == first));
    assert_eq!(words[11], last);

    // Either separator decodes
    let entropy = mnemonic_to_entropy(&phrase, Language::Japanese).unwrap();
    assert_eq!(entropy.as_bytes(), &[0u8; 16]);
    let ascii = phrase.replace('\u{3000}', " ");
    let entropy = mnemonic_to_entropy(&ascii, Language::Japanese).unwrap();
    assert_eq!(entropy.as_bytes(), &[0u8; 16]);

    let seed = mnemonic_to_seed(&phrase, "㍍ガバヴァぱばぐゞちぢ十人十色");
    assert_eq!(
        seed.to_hex(),
        "a262d6fb6122ecf45be09c50492b31f92e9beb7d9a845987a02cefda57a15f9c467a17872029a9e92299b5cbdf306e3a0ee620245cbd508959b6cb7ca637bd55"
    );
    // NFKD maps U+3000 to a plain space, so both spellings share a seed
    assert_eq!(seed, mnemonic_to_seed(&ascii, "㍍ガバヴァぱばぐゞちぢ十人十色"));
}

#[test]
fn test_spanish_composed_input() {
    // Precomposed U+00E1, while the bundled list is decomposed
    let phrase = format!("{} abierto", vec!["\u{e1}baco"; 11].join(" "));
    let entropy = mnemonic_to_entropy(&phrase, Language::Spanish).unwrap();
    assert_eq!(entropy.as_bytes(), &[0u8; 16]);

    let canonical = Mnemonic::from_phrase(&phrase, Language::Spanish).unwrap();
    let expected: String = phrase.nfkd().collect();
    assert_eq!(canonical.phrase(), expected);
}

#[test]
fn test_unknown_word_reported_with_position() {
    let phrase = "abandon abandon abandon abandon abandon bogus abandon abandon abandon abandon abandon about";
    assert_eq!(
        mnemonic_to_entropy(phrase, Language::English).unwrap_err(),
        MnemonicError::UnknownWord {
            word: "bogus".into(),
            position: Some(5)
        }
    );
}

#[test]
fn test_every_language_roundtrips() {
    let registry = WordlistRegistry::builtin();
    let entropy: Vec<u8> = (0u8..32).collect();
    for language in registry.languages() {
        let phrase = entropy_to_mnemonic(&entropy, language).unwrap();
        let wordlist = registry.wordlist(language).unwrap();
        let decoded = decode(&phrase, wordlist).unwrap();
        assert!(decoded.checksum_valid, "{}", language);
        assert_eq!(decoded.entropy.as_bytes(), &entropy[..]);
        assert!(registry.detect_language(&phrase).contains(&language));
    }
}
