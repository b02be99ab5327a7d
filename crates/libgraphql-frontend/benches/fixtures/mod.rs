use std::fmt::Write;

pub const STARWARS_SCHEMA: &str = r#"
schema {
  query: Query
  mutation: Mutation
  subscription: Subscription
}

type Query {
  hero(episode: Episode): Character
  reviews(episode: Episode!): [Review]
  search(text: String): [SearchResult]
  character(id: ID!): Character
  droid(id: ID!): Droid
  human(id: ID!): Human
  starship(id: ID!): Starship
}

type Mutation {
  createReview(episode: Episode, review: ReviewInput!): Review
}

type Subscription {
  reviewAdded(episode: Episode): Review
}

enum Episode { NEWHOPE EMPIRE JEDI }

interface Character {
  id: ID!
  name: String!
  friends: [Character]
  friendsConnection(first: Int, after: ID): FriendsConnection!
  appearsIn: [Episode]!
}

enum LengthUnit { METER FOOT }

type Human implements Character {
  id: ID!
  name: String!
  homePlanet: String
  height(unit: LengthUnit = METER): Float
  mass: Float
  friends: [Character]
  friendsConnection(first: Int, after: ID): FriendsConnection!
  appearsIn: [Episode]!
  starships: [Starship]
}

type Droid implements Character {
  id: ID!
  name: String!
  friends: [Character]
  friendsConnection(first: Int, after: ID): FriendsConnection!
  appearsIn: [Episode]!
  primaryFunction: String
}

type FriendsConnection {
  totalCount: Int
  edges: [FriendsEdge]
  friends: [Character]
  pageInfo: PageInfo!
}

type FriendsEdge { cursor: ID! node: Character }

type PageInfo { startCursor: ID endCursor: ID hasNextPage: Boolean! }

type Review { episode: Episode stars: Int! commentary: String }

input ReviewInput { stars: Int! commentary: String favorite_color: ColorInput }

input ColorInput { red: Int! green: Int! blue: Int! }

type Starship { id: ID! name: String! length(unit: LengthUnit = METER): Float coordinates: [[Float!]!] }

union SearchResult = Human | Droid | Starship

directive @cacheControl(maxAge: Int = 0) on FIELD_DEFINITION | OBJECT | INTERFACE
"#;

pub const SIMPLE_QUERY: &str = "{ hero { name } }";

pub const COMPLEX_QUERY: &str = r#"
query HeroDetails($episode: Episode = JEDI, $first: Int = 10, $withFriends: Boolean!)
  @cached(ttl: 60) {
  hero(episode: $episode) {
    ...CharacterFields
    ... on Droid { primaryFunction }
    ... on Human { homePlanet height(unit: FOOT) starships { name length } }
    friendsConnection(first: $first) @include(if: $withFriends) {
      totalCount
      edges { cursor node { ...CharacterFields } }
      pageInfo { startCursor endCursor hasNextPage }
    }
  }
  search(text: "Skywalker é") {
    ... on Starship { coordinates name }
  }
}

mutation AddReview($ep: Episode!, $review: ReviewInput!) {
  createReview(episode: $ep, review: $review) { stars commentary }
  other: createReview(
    episode: EMPIRE,
    review: { stars: 5, commentary: "ok", favorite_color: { red: 1, green: 2, blue: 3 } }
  ) { stars }
}

fragment CharacterFields on Character {
  id
  name
  appearsIn
}
"#;

/// Generates a schema with `types` object types, each with `fields` fields
/// referencing its neighbours, plus one input object and one enum per ten
/// types.
pub fn synthetic_schema(types: usize, fields: usize) -> String {
    let mut out = String::with_capacity(types * fields * 40);
    for t in 0..types {
        writeln!(out, "type Type{t} @key(fields: \"id\") {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        for f in 0..fields {
            let target = (t + f + 1) % types;
            writeln!(out, "  field{f}(first: Int = 10, filter: Filter{}): [Type{target}!]", t / 10)
                .unwrap();
        }
        writeln!(out, "}}\n").unwrap();
        if t % 10 == 0 {
            let n = t / 10;
            writeln!(out, "input Filter{n} {{ ids: [ID!] status: Status{n} = ACTIVE }}\n").unwrap();
            writeln!(out, "enum Status{n} {{ ACTIVE INACTIVE ARCHIVED }}\n").unwrap();
        }
    }
    out
}

/// Generates a query whose selection sets nest `depth` levels deep.
pub fn nested_query(depth: usize) -> String {
    let mut out = String::from("query Nested ");
    for level in 0..depth {
        write!(out, "{{ id level{level}: child ").unwrap();
    }
    out.push_str("{ name }");
    out.push_str(&" }".repeat(depth));
    out
}

/// Generates a document of `count` named operations, each with a fragment
/// spread and a variable.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 100);
    for i in 0..count {
        writeln!(
            out,
            "query Op{i}($id: ID!) {{ node(id: $id) {{ id ...Common alias{i}: name }} }}",
        )
        .unwrap();
    }
    out.push_str("fragment Common on Node { id }\n");
    out
}
